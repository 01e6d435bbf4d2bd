use std::rc::Rc;

use anyhow::{Context, Result, anyhow, bail};
use serde_json::json;
use tracing::{info, info_span, warn};

use venture_core::collection::{CollectionView, SortDirection};
use venture_core::screens::{
    DealPipeline, DetailView, INTEREST_AREAS, MyVentures, OnboardingFlow, PortfolioExplorer,
    UserDirectory,
};
use venture_core::{DealTab, DockedPanel, Navigation, PanelConfig, TracingSurface, Workspace};
use venture_data::paths::sample_data_root;
use venture_data::{RequestOutcome, SampleCatalog};
use venture_model::Identified;

use venture_cli::panel_script::{parse_script, run_script};
use venture_cli::render;

use crate::cli::{
    Cli, Command, DEFAULT_MEMBER, DealArgs, DealsArgs, ListingArgs, OnboardArgs,
    OutputFormatArg, PanelArgs, PortfolioArgs, UsersArgs, VenturesArgs,
};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Users(args) => run_users(&load_catalog(cli)?, args),
        Command::Deals(args) => run_deals(&load_catalog(cli)?, args),
        Command::Deal(args) => run_deal(load_catalog(cli)?, args),
        Command::Ventures(args) => run_ventures(&load_catalog(cli)?, args),
        Command::Portfolio(args) => run_portfolio(&load_catalog(cli)?, args),
        Command::Onboard(args) => run_onboard(args),
        Command::Panel(args) => run_panel(args),
    }
}

fn load_catalog(cli: &Cli) -> Result<SampleCatalog> {
    let root = cli.data_dir.clone().unwrap_or_else(sample_data_root);
    SampleCatalog::load(&root).with_context(|| format!("load sample data from {}", root.display()))
}

/// Apply `--search`, `--sort` and `--desc` on top of the screen defaults.
fn apply_listing<T: Identified + 'static>(view: &mut CollectionView<T>, listing: &ListingArgs) {
    if let Some(query) = &listing.search {
        view.set_search(query.clone());
    }
    let direction = if listing.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    if let Some(key) = &listing.sort {
        if view.fields().get(key).is_none() {
            warn!(key = %key, "unknown sort field; keeping source order");
        }
        view.set_sort(key.clone(), direction);
    } else if listing.desc
        && let Some(key) = view.spec().sort_key.clone()
    {
        view.set_sort(key, direction);
    }
}

fn print_json<S: serde::Serialize + ?Sized>(value: &S) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("serialize output")?);
    Ok(())
}

fn run_users(catalog: &SampleCatalog, args: &UsersArgs) -> Result<()> {
    let mut directory = UserDirectory::new(catalog.users.clone());
    apply_listing(directory.view_mut(), &args.listing);
    directory.filter_role(args.role);
    directory.filter_status(args.status);

    if let Some(id) = &args.edit {
        report_request("edit", id, directory.edit(id))?;
    }
    if let Some(id) = &args.delete {
        report_request("delete", id, directory.delete(id))?;
    }

    let visible = directory.view().visible();
    match args.listing.format {
        OutputFormatArg::Json => print_json(&visible),
        OutputFormatArg::Table => {
            println!("{}", render::users_table(&visible));
            println!(
                "{} of {} members. {}",
                visible.len(),
                directory.view().total(),
                render::role_counts_line(&directory.role_counts())
            );
            Ok(())
        }
    }
}

fn report_request(action: &str, id: &str, outcome: RequestOutcome) -> Result<()> {
    match outcome {
        RequestOutcome::Acknowledged => {
            println!("{action} request for {id} recorded; sample data is read-only");
            Ok(())
        }
        RequestOutcome::NotFound => bail!("no user with id `{id}`"),
    }
}

fn run_deals(catalog: &SampleCatalog, args: &DealsArgs) -> Result<()> {
    let mut pipeline = DealPipeline::new(catalog.deals.clone());
    apply_listing(pipeline.view_mut(), &args.listing);
    pipeline.filter_stage(args.stage);

    let visible = pipeline.view().visible();
    let summary = pipeline.stage_summary();
    match args.listing.format {
        OutputFormatArg::Json => print_json(&json!({ "deals": visible, "stages": summary })),
        OutputFormatArg::Table => {
            println!("{}", render::deals_table(&visible));
            println!("{}", render::stage_summary_table(&summary));
            Ok(())
        }
    }
}

fn run_deal(catalog: SampleCatalog, args: &DealArgs) -> Result<()> {
    let tab = DealTab::from_key(&args.tab).ok_or_else(|| {
        anyhow!(
            "unknown tab `{}` (expected due-diligence, terms or closing)",
            args.tab
        )
    })?;
    let mut workspace = Workspace::new(
        catalog,
        DEFAULT_MEMBER,
        PanelConfig::default(),
        Rc::new(TracingSurface),
    )?;
    workspace.open_deal(&args.id);
    workspace.select_tab(tab);

    let checklist = workspace.checklist(&args.id).map(|checklist| {
        if args.generate {
            checklist.generate_agreement();
        }
        if args.sign {
            checklist.sign_agreement();
        }
        *checklist
    });

    match (workspace.deal_detail(), checklist) {
        (Some(DetailView::Found(deal)), Some(checklist)) => {
            println!("{}", render::deal_detail_text(deal, tab, &checklist));
        }
        (Some(DetailView::NotFound { id, back }), _) => {
            println!("{}", render::not_found_text("deal", &id, &back));
        }
        _ => {}
    }
    Ok(())
}

fn run_ventures(catalog: &SampleCatalog, args: &VenturesArgs) -> Result<()> {
    let mut ventures = MyVentures::new(catalog.ventures.clone(), args.founder.clone());
    apply_listing(ventures.view_mut(), &args.listing);

    let visible = ventures.view().visible();
    match args.listing.format {
        OutputFormatArg::Json => print_json(&visible),
        OutputFormatArg::Table => {
            if visible.is_empty() {
                println!(
                    "{} has no ventures matching the current filters.",
                    ventures.founder()
                );
                return Ok(());
            }
            println!("{}", render::ventures_table(&visible));
            println!("{}", render::portfolio_summary_line(&ventures.summary()));
            Ok(())
        }
    }
}

fn run_portfolio(catalog: &SampleCatalog, args: &PortfolioArgs) -> Result<()> {
    let mut portfolio = PortfolioExplorer::new(catalog.ventures.clone());
    apply_listing(portfolio.view_mut(), &args.listing);
    portfolio.filter_industry(args.industry.as_deref());
    portfolio.filter_stage(args.stage);

    let visible = portfolio.view().visible();
    let summary = portfolio.summary();
    match args.listing.format {
        OutputFormatArg::Json => print_json(&json!({ "ventures": visible, "summary": summary })),
        OutputFormatArg::Table => {
            println!("{}", render::ventures_table(&visible));
            println!("{}", render::portfolio_summary_line(&summary));
            println!("Industries: {}", portfolio.industries().join(", "));
            Ok(())
        }
    }
}

fn run_onboard(args: &OnboardArgs) -> Result<()> {
    let span = info_span!("onboarding", role = args.role.as_str());
    let _guard = span.enter();

    let mut flow = OnboardingFlow::new()?.on_complete(|data| {
        info!(steps_with_answers = data.len(), "onboarding answers submitted");
    });
    flow.select_role(args.role);
    flow.set_profile(&args.name, args.company.as_deref());
    for answer in &args.answers {
        let (step, key, value) = split_answer(answer)?;
        if !flow.answer(step, key, value) {
            bail!("unknown onboarding step `{step}` in `{answer}`");
        }
    }
    for interest in &args.interests {
        if flow.toggle_interest(interest).is_none() {
            bail!(
                "unknown interest area `{interest}`; expected one of: {}",
                INTEREST_AREAS.join(", ")
            );
        }
    }

    let steps = flow.wizard().state().steps().len();
    for _ in 0..steps {
        if flow.next() == Navigation::Completed {
            break;
        }
    }

    let summary = flow.summary();
    let answers = flow.wizard().state().accumulated_data();
    match args.format {
        OutputFormatArg::Json => print_json(&json!({ "summary": summary, "answers": answers })),
        OutputFormatArg::Table => {
            println!("{}", render::onboarding_table(answers));
            println!("{}", render::onboarding_summary_line(&summary));
            Ok(())
        }
    }
}

/// Split `step.key=value`.
fn split_answer(answer: &str) -> Result<(&str, &str, &str)> {
    let (path, value) = answer
        .split_once('=')
        .ok_or_else(|| anyhow!("answer `{answer}` must look like STEP.KEY=VALUE"))?;
    let (step, key) = path
        .split_once('.')
        .ok_or_else(|| anyhow!("answer `{answer}` must look like STEP.KEY=VALUE"))?;
    Ok((step.trim(), key.trim(), value.trim()))
}

fn run_panel(args: &PanelArgs) -> Result<()> {
    let config = PanelConfig {
        min_width: args.min_width,
        max_width: args.max_width,
        initial_width: args.initial_width,
    };
    let steps = parse_script(&args.script)?;
    let mut panel = DockedPanel::new(config, Rc::new(TracingSurface))
        .context("invalid panel configuration")?
        .with_agents(venture_core::panel::DEFAULT_AGENTS.iter().copied());
    let trace = run_script(&mut panel, &steps, args.viewport);
    match args.format {
        OutputFormatArg::Json => print_json(&trace),
        OutputFormatArg::Table => {
            println!("{}", render::panel_trace_table(&trace));
            Ok(())
        }
    }
}
