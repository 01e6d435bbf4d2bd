//! Scripted pointer input for the docked panel.
//!
//! A script is a list of tokens such as `toggle begin move:900 end`.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use venture_core::{DockedPanel, PanelState};

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStep {
    Toggle,
    Begin,
    /// Pointer x position in pixels.
    Move(i32),
    End,
    Agent(String),
}

impl FromStr for PanelStep {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self> {
        let token = token.trim();
        if let Some(x) = token.strip_prefix("move:") {
            let x = x
                .parse()
                .with_context(|| format!("invalid pointer position in `{token}`"))?;
            return Ok(Self::Move(x));
        }
        if let Some(name) = token.strip_prefix("agent:") {
            return Ok(Self::Agent(name.to_string()));
        }
        match token {
            "toggle" => Ok(Self::Toggle),
            "begin" => Ok(Self::Begin),
            "end" => Ok(Self::End),
            other => bail!(
                "unknown panel step `{other}` (expected toggle, begin, move:<x>, end or agent:<name>)"
            ),
        }
    }
}

impl std::fmt::Display for PanelStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toggle => f.write_str("toggle"),
            Self::Begin => f.write_str("begin"),
            Self::Move(x) => write!(f, "move:{x}"),
            Self::End => f.write_str("end"),
            Self::Agent(name) => write!(f, "agent:{name}"),
        }
    }
}

/// Panel state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelTrace {
    pub step: String,
    pub state: PanelState,
    pub agent: Option<String>,
}

pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<PanelStep>> {
    tokens.iter().map(|token| token.as_ref().parse()).collect()
}

/// Feed `steps` to `panel` in a viewport `viewport_width` pixels wide.
pub fn run_script(
    panel: &mut DockedPanel,
    steps: &[PanelStep],
    viewport_width: i32,
) -> Vec<PanelTrace> {
    steps
        .iter()
        .map(|step| {
            let state = match step {
                PanelStep::Toggle => panel.toggle(),
                PanelStep::Begin => panel.begin_drag(),
                PanelStep::Move(x) => panel.on_pointer_move(*x, viewport_width),
                PanelStep::End => panel.end_drag(),
                PanelStep::Agent(name) => {
                    panel.select_agent(name);
                    panel.state()
                }
            };
            PanelTrace {
                step: step.to_string(),
                state,
                agent: panel.active_agent().map(str::to_string),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens() {
        let steps =
            parse_script(&["toggle", "begin", "move:-20", "end", "agent:Market Scout"]).unwrap();
        assert_eq!(
            steps,
            vec![
                PanelStep::Toggle,
                PanelStep::Begin,
                PanelStep::Move(-20),
                PanelStep::End,
                PanelStep::Agent("Market Scout".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_unknown_tokens() {
        let error = parse_script(&["toggle", "resize"]).unwrap_err();
        assert!(error.to_string().contains("unknown panel step `resize`"));
        assert!(parse_script(&["move:wide"]).is_err());
    }
}
