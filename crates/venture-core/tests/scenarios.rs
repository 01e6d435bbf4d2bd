//! End-to-end screen scenarios over hand-built and shipped sample data.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use chrono::NaiveDate;
use venture_core::collection::SortDirection;
use venture_core::screens::{DetailView, MyVentures, UserDirectory};
use venture_core::{
    DealTab, DockedPanel, Navigation, PanelConfig, StepDescriptor, TracingSurface, View,
    WizardController, Workspace,
};
use venture_data::{InMemorySource, RecordSource, RequestOutcome, SampleCatalog};
use venture_model::{DealStage, User, UserRole, UserStatus, Venture};

fn shipped_catalog() -> SampleCatalog {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../sample-data");
    SampleCatalog::load(&root).expect("load sample data")
}

fn workspace(member: &str) -> Workspace {
    Workspace::new(
        shipped_catalog(),
        member,
        PanelConfig::default(),
        Rc::new(TracingSurface),
    )
    .expect("default panel config is valid")
}

fn user(id: &str, name: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        role,
        status: UserStatus::Active,
        company: None,
        joined: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

fn visible_ids<T: venture_model::Identified>(records: Vec<&T>) -> Vec<String> {
    records.iter().map(|record| record.id().to_string()).collect()
}

#[test]
fn founder_filter_keeps_source_order() {
    let users = vec![
        user("1", "Zoe", UserRole::Founder),
        user("2", "Yann", UserRole::Investor),
        user("3", "Xia", UserRole::Expert),
        user("4", "Will", UserRole::Founder),
        user("5", "Vera", UserRole::Investor),
    ];
    let source = Arc::new(InMemorySource::new("user", users).unwrap());
    let mut directory = UserDirectory::new(source);
    directory.view_mut().set_sort("unsorted", SortDirection::Asc);
    directory.filter_role(Some(UserRole::Founder));

    assert_eq!(visible_ids(directory.view().visible()), vec!["1", "4"]);
    assert_eq!(directory.view().total(), 5);
}

#[test]
fn user_directory_over_sample_data() {
    let mut workspace = workspace("Amara Okafor");
    let directory = &mut workspace.users;

    directory.filter_role(Some(UserRole::Founder));
    assert_eq!(
        visible_ids(directory.view().visible()),
        vec!["u-001", "u-004", "u-010", "u-007"]
    );

    directory.filter_role(None);
    directory.filter_status(Some(UserStatus::Pending));
    assert_eq!(visible_ids(directory.view().visible()), vec!["u-009", "u-004"]);

    directory.view_mut().toggle_sort("name");
    assert_eq!(visible_ids(directory.view().visible()), vec!["u-004", "u-009"]);

    let counts = directory.role_counts();
    assert_eq!(counts[&UserRole::Founder], 4);
    assert_eq!(counts[&UserRole::Investor], 3);
    assert_eq!(counts[&UserRole::Admin], 1);
}

#[test]
fn search_matches_email_and_company() {
    let mut workspace = workspace("Amara Okafor");
    workspace.users.view_mut().set_search("EXAMPLE");
    let ids = visible_ids(workspace.users.view().visible());
    // u-003 has no company; the hit comes from the email.
    assert!(ids.contains(&"u-003".to_string()));
    workspace.users.view_mut().set_search("capital");
    assert_eq!(visible_ids(workspace.users.view().visible()), vec!["u-005"]);
}

#[test]
fn edit_and_delete_never_change_records() {
    let workspace = workspace("Amara Okafor");
    assert_eq!(workspace.users.delete("u-002"), RequestOutcome::Acknowledged);
    assert_eq!(workspace.users.edit("u-404"), RequestOutcome::NotFound);
    assert_eq!(workspace.users.view().total(), 10);
    assert!(workspace.catalog().users.find("u-002").is_some());
}

#[test]
fn pipeline_searches_tags_and_summarises_stages() {
    let mut workspace = workspace("Amara Okafor");
    assert_eq!(
        visible_ids(workspace.pipeline.view().visible()),
        vec!["d-105", "d-104", "d-107", "d-103", "d-101", "d-108", "d-102", "d-106"]
    );

    let summary = workspace.pipeline.stage_summary();
    assert_eq!(summary.len(), DealStage::all().len());
    assert_eq!(summary[0].stage, DealStage::Sourcing);
    assert_eq!(summary[0].count, 2);
    assert_eq!(summary[0].amount, 1_150_000.0);

    workspace.pipeline.view_mut().set_search("climate");
    assert_eq!(
        visible_ids(workspace.pipeline.view().visible()),
        vec!["d-103", "d-102"]
    );

    workspace.pipeline.view_mut().set_search("");
    workspace.pipeline.filter_stage(Some(DealStage::Closing));
    assert_eq!(visible_ids(workspace.pipeline.view().visible()), vec!["d-104"]);
}

#[test]
fn missing_valuation_sorts_lowest() {
    let mut workspace = workspace("Amara Okafor");
    workspace
        .pipeline
        .view_mut()
        .set_sort("valuation", SortDirection::Asc);
    let ids = visible_ids(workspace.pipeline.view().visible());
    assert_eq!(ids.first().map(String::as_str), Some("d-102"));
}

#[test]
fn my_ventures_never_leave_the_founder() {
    let mut workspace = workspace("Amara Okafor");
    let ventures: &mut MyVentures = &mut workspace.my_ventures;
    assert_eq!(visible_ids(ventures.view().visible()), vec!["v-206", "v-201"]);

    ventures.view_mut().set_filter("founder", "Jonas Lindqvist");
    assert_eq!(visible_ids(ventures.view().visible()), vec!["v-206", "v-201"]);

    ventures.view_mut().set_search("fjord");
    assert!(ventures.view().visible().is_empty());

    ventures.view_mut().reset();
    let summary = ventures.summary();
    assert_eq!(summary.ventures, 2);
    assert_eq!(summary.invested, 1_150_000.0);
    assert_eq!(summary.current_value, 2_550_000.0);
}

#[test]
fn portfolio_filters_by_industry() {
    let mut workspace = workspace("Amara Okafor");
    assert_eq!(workspace.portfolio.industries().len(), 7);

    let totals = workspace.portfolio.summary();
    assert_eq!(totals.ventures, 8);
    assert_eq!(totals.invested, 12_700_000.0);

    workspace.portfolio.filter_industry(Some("Healthcare"));
    assert_eq!(
        visible_ids(workspace.portfolio.view().visible()),
        vec!["v-201", "v-206"]
    );
}

#[test]
fn selecting_a_row_notifies_without_changing_the_list() {
    let selected = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&selected);
    let catalog = shipped_catalog();
    let source: Arc<dyn RecordSource<Venture>> = catalog.ventures.clone();
    let mut view = venture_core::collection::CollectionView::new(
        source,
        venture_core::screens::venture_fields(),
    )
    .on_select(move |id| sink.borrow_mut().push(id.to_string()));

    let before = visible_ids(view.visible());
    view.select_item("v-203");
    assert_eq!(visible_ids(view.visible()), before);
    assert_eq!(*selected.borrow(), vec!["v-203".to_string()]);
}

#[test]
fn unknown_deal_renders_not_found_with_way_back() {
    let mut workspace = workspace("Amara Okafor");
    workspace.navigate(View::Pipeline);
    workspace.open_deal("d-999");

    match workspace.deal_detail() {
        Some(DetailView::NotFound { id, back }) => {
            assert_eq!(id, "d-999");
            assert_eq!(back, View::Pipeline);
        }
        other => panic!("expected not-found view, got {other:?}"),
    }
    assert_eq!(workspace.back(), &View::Pipeline);
}

#[test]
fn deal_tabs_and_closing_checklist() {
    let mut workspace = workspace("Amara Okafor");
    workspace.open_deal("d-104");
    let deal = workspace.deal_detail().and_then(|detail| detail.found().cloned());
    assert_eq!(deal.map(|deal| deal.company), Some("Sika Pay".to_string()));

    workspace.select_tab(DealTab::Closing);
    assert_eq!(workspace.view().current_tab(), Some(DealTab::Closing));

    let checklist = workspace.checklist("d-104").expect("d-104 exists");
    assert!(!checklist.sign_agreement());
    checklist.generate_agreement();
    assert!(checklist.sign_agreement());
    assert!(workspace.checklist("d-104").is_some_and(|c| c.is_complete()));
    assert!(workspace.checklist("d-101").is_some_and(|c| !c.agreement_generated));
}

#[test]
fn unknown_deal_has_no_checklist() {
    let mut workspace = workspace("Amara Okafor");
    workspace.open_deal("d-999");
    assert!(workspace.checklist("d-999").is_none());
    assert!(workspace.checklist("d-999").is_none());
    assert!(workspace.checklist("d-102").is_some());
}

#[test]
fn back_without_history_goes_to_the_parent_list() {
    let mut on_deal = workspace("Amara Okafor").with_view(View::deal("d-104"));
    assert_eq!(on_deal.back(), &View::Pipeline);
    assert_eq!(on_deal.back(), &View::Dashboard);

    let mut on_venture = workspace("Amara Okafor").with_view(View::venture("v-201"));
    assert_eq!(on_venture.back(), &View::MyVentures);
}

#[test]
fn jump_then_back_returns_to_role() {
    let steps = ["role", "profile", "mindset", "intelligence", "direction"]
        .into_iter()
        .map(|id| StepDescriptor::new(id, id))
        .collect();
    let mut wizard = WizardController::new(steps).unwrap();
    wizard.jump_to("direction");
    assert_eq!(wizard.jump_to("profile"), Navigation::Moved { from: 4, to: 1 });
    assert_eq!(wizard.go_back(), Navigation::Moved { from: 1, to: 0 });
    assert_eq!(wizard.current_step().id, "role");
}

#[test]
fn drag_clamps_to_panel_bounds() {
    let mut panel = DockedPanel::new(PanelConfig::default(), Rc::new(TracingSurface)).unwrap();
    panel.toggle();
    panel.begin_drag();
    assert_eq!(panel.on_pointer_move(0, 10_000).width_px, 800);
    assert_eq!(panel.on_pointer_move(9_995, 10_000).width_px, 300);
    panel.end_drag();
    assert_eq!(panel.state().width_px, 300);
}

#[test]
fn workspace_panel_hosts_default_agents() {
    let mut workspace = workspace("Amara Okafor");
    assert_eq!(workspace.panel.agents().len(), 3);
    assert!(workspace.panel.select_agent("Market Scout"));
    assert_eq!(workspace.panel.active_agent(), Some("Market Scout"));
}
