//! Table and text rendering for CLI output.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use venture_core::format::{self, MISSING};
use venture_core::screens::{ClosingChecklist, OnboardingSummary, PortfolioSummary, StageSummary};
use venture_core::wizard::AccumulatedData;
use venture_core::{DealTab, View};
use venture_model::{Deal, User, UserRole, UserStatus, Venture};

use crate::panel_script::PanelTrace;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

pub fn users_table(users: &[&User]) -> Table {
    let mut table = Table::new();
    table.set_header(headers(&[
        "ID", "Name", "Email", "Role", "Status", "Company", "Joined",
    ]));
    apply_table_style(&mut table);
    for user in users {
        table.add_row(vec![
            dim_cell(&user.id),
            Cell::new(&user.name).add_attribute(Attribute::Bold),
            Cell::new(&user.email),
            Cell::new(user.role.label()),
            status_cell(user.status),
            optional_cell(user.company.as_deref()),
            Cell::new(format::date(user.joined)),
        ]);
    }
    table
}

pub fn deals_table(deals: &[&Deal]) -> Table {
    let mut table = Table::new();
    table.set_header(headers(&[
        "ID",
        "Company",
        "Sector",
        "Stage",
        "Amount",
        "Valuation",
        "Lead",
        "Expected close",
        "Tags",
    ]));
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for deal in deals {
        table.add_row(vec![
            dim_cell(&deal.id),
            Cell::new(&deal.company).add_attribute(Attribute::Bold),
            Cell::new(&deal.sector),
            Cell::new(deal.stage.label()),
            Cell::new(format::currency(deal.amount)),
            Cell::new(format::optional(deal.valuation, format::currency)),
            Cell::new(&deal.lead_investor),
            Cell::new(format::optional(deal.expected_close, format::date)),
            Cell::new(deal.tags.join(", ")),
        ]);
    }
    table
}

pub fn ventures_table(ventures: &[&Venture]) -> Table {
    let mut table = Table::new();
    table.set_header(headers(&[
        "ID",
        "Venture",
        "Industry",
        "Stage",
        "Founder",
        "Ownership",
        "Invested",
        "Value",
        "Multiple",
    ]));
    apply_table_style(&mut table);
    for index in 5..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for venture in ventures {
        table.add_row(vec![
            dim_cell(&venture.id),
            Cell::new(&venture.name).add_attribute(Attribute::Bold),
            Cell::new(&venture.industry),
            Cell::new(venture.stage.label()),
            Cell::new(&venture.founder),
            Cell::new(format::percent(venture.ownership_pct)),
            Cell::new(format::currency(venture.invested)),
            Cell::new(format::currency(venture.current_value)),
            Cell::new(format::optional(venture.multiple(), format::multiple)),
        ]);
    }
    table
}

pub fn stage_summary_table(summary: &[StageSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(headers(&["Stage", "Deals", "Amount"]));
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in summary {
        let count = if entry.count > 0 {
            Cell::new(entry.count).add_attribute(Attribute::Bold)
        } else {
            dim_cell(entry.count)
        };
        table.add_row(vec![
            Cell::new(entry.stage.label()),
            count,
            Cell::new(format::currency(entry.amount)),
        ]);
    }
    table
}

pub fn panel_trace_table(trace: &[PanelTrace]) -> Table {
    let mut table = Table::new();
    table.set_header(headers(&["Step", "Open", "Width", "Dragging", "Agent"]));
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in trace {
        table.add_row(vec![
            Cell::new(&entry.step),
            flag_cell(entry.state.is_open),
            Cell::new(format!("{}px", entry.state.width_px)),
            flag_cell(entry.state.is_dragging),
            optional_cell(entry.agent.as_deref()),
        ]);
    }
    table
}

pub fn onboarding_table(data: &AccumulatedData) -> Table {
    let mut table = Table::new();
    table.set_header(headers(&["Step", "Answers"]));
    apply_table_style(&mut table);
    for (step, answers) in data {
        let rendered: Vec<String> = answers
            .iter()
            .map(|(key, value)| match value.as_str() {
                Some(text) => format!("{key}={text}"),
                None => format!("{key}={value}"),
            })
            .collect();
        table.add_row(vec![Cell::new(step), Cell::new(rendered.join("\n"))]);
    }
    table
}

/// `Founder 4, Investor 3, ...` in role order.
pub fn role_counts_line(counts: &BTreeMap<UserRole, usize>) -> String {
    counts
        .iter()
        .map(|(role, count)| format!("{} {count}", role.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn portfolio_summary_line(summary: &PortfolioSummary) -> String {
    format!(
        "{} ventures, invested {}, current value {} ({})",
        summary.ventures,
        format::currency(summary.invested),
        format::currency(summary.current_value),
        format::optional(summary.multiple, format::multiple),
    )
}

pub fn onboarding_summary_line(summary: &OnboardingSummary) -> String {
    let role = summary.role.map_or(MISSING, |role| role.label());
    let name = summary.name.as_deref().unwrap_or(MISSING);
    let interests = if summary.interests.is_empty() {
        MISSING.to_string()
    } else {
        summary.interests.join(", ")
    };
    let status = if summary.completed { "completed" } else { "incomplete" };
    format!("{name} ({role}), interests: {interests}, onboarding {status}")
}

/// Text body of the deal lifecycle screen for one tab.
pub fn deal_detail_text(deal: &Deal, tab: DealTab, checklist: &ClosingChecklist) -> String {
    let tabs: Vec<String> = DealTab::all()
        .iter()
        .map(|candidate| {
            if *candidate == tab {
                format!("[{}]", candidate.name())
            } else {
                candidate.name().to_string()
            }
        })
        .collect();
    let mut lines = vec![
        format!("{} ({})", deal.company, deal.id),
        format!("Stage: {}", deal.stage.label()),
        tabs.join(" | "),
    ];
    match tab {
        DealTab::DueDiligence => {
            lines.push(format!("Sector: {}", deal.sector));
            lines.push(format!("Lead investor: {}", deal.lead_investor));
            lines.push(format!("Tags: {}", deal.tags.join(", ")));
        }
        DealTab::Terms => {
            lines.push(format!("Amount: {}", format::currency(deal.amount)));
            lines.push(format!(
                "Valuation: {}",
                format::optional(deal.valuation, format::currency)
            ));
            lines.push(format!(
                "Expected close: {}",
                format::optional(deal.expected_close, format::date)
            ));
        }
        DealTab::Closing => {
            lines.push(format!(
                "Agreement generated: {}",
                yes_no(checklist.agreement_generated)
            ));
            lines.push(format!(
                "Agreement signed: {}",
                yes_no(checklist.agreement_signed)
            ));
        }
    }
    lines.join("\n")
}

pub fn not_found_text(kind: &str, id: &str, back: &View) -> String {
    format!("No {kind} with id `{id}`. Back to {}.", back.title())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn headers(labels: &[&str]) -> Vec<Cell> {
    labels.iter().map(|label| header_cell(label)).collect()
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: UserStatus) -> Cell {
    let color = match status {
        UserStatus::Active => Color::Green,
        UserStatus::Pending => Color::Yellow,
        UserStatus::Suspended => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell(MISSING),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
