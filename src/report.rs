use crate::report_config::ReportConfig;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use robots_tags::{RobotsDirectives, RobotsSource};
use serde::Serialize;
use std::io::{Write, stdout};

#[derive(Debug, Serialize)]
pub struct AgentVerdict {
    agent: String,
    may_index: bool,
    may_follow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_image_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_video_preview: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SourceReport {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    headers: Vec<AgentVerdict>,
    meta: Vec<AgentVerdict>,
}

impl SourceReport {
    pub fn new(source: &RobotsSource, config: &ReportConfig) -> Self {
        Self {
            source: source.location().to_owned(),
            status_code: source.status_code(),
            headers: verdicts(&source.headers(), config.agents()),
            meta: verdicts(&source.meta(), config.agents()),
        }
    }
}

fn verdicts<R: RobotsDirectives>(robots: &R, requested: &[String]) -> Vec<AgentVerdict> {
    let agents: Vec<String> = if requested.is_empty() {
        let default_agent = robots.default_agent();
        std::iter::once(default_agent)
            .chain(robots.table().agents().filter(|agent| *agent != default_agent))
            .map(str::to_owned)
            .collect()
    } else {
        requested.to_vec()
    };

    agents
        .into_iter()
        .map(|agent| AgentVerdict {
            may_index: robots.may_index(agent.as_str()),
            may_follow: robots.may_follow(agent.as_str()),
            max_snippet: robots.max_snippet(agent.as_str()).map(str::to_owned),
            max_image_preview: robots.max_image_preview(agent.as_str()).map(str::to_owned),
            max_video_preview: robots.max_video_preview(agent.as_str()).map(str::to_owned),
            agent,
        })
        .collect()
}

pub fn print_reports(reports: &[SourceReport], config: &ReportConfig) -> anyhow::Result<()> {
    if config.json() {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    let mut stdout = stdout();
    for report in reports {
        let status = report
            .status_code
            .map(|status_code| format!(" ({})", status_code))
            .unwrap_or_default();
        queue!(stdout, Print(format!("{}{}\n", report.source, status)))?;
        print_section(&mut stdout, "X-Robots-Tag", &report.headers)?;
        print_section(&mut stdout, "meta", &report.meta)?;
    }
    stdout.flush()?;
    Ok(())
}

fn print_section(stdout: &mut impl Write, title: &str, verdicts: &[AgentVerdict]) -> anyhow::Result<()> {
    queue!(stdout, Print(format!("  {}\n", title)))?;
    for verdict in verdicts {
        queue!(stdout, Print(format!("    {:<16}", verdict.agent)))?;
        print_permission(stdout, "index", verdict.may_index)?;
        print_permission(stdout, "follow", verdict.may_follow)?;
        let limits = [
            ("max-snippet", &verdict.max_snippet),
            ("max-image-preview", &verdict.max_image_preview),
            ("max-video-preview", &verdict.max_video_preview),
        ];
        for (name, value) in limits {
            if let Some(value) = value {
                queue!(stdout, Print(format!(" {}={}", name, value)))?;
            }
        }
        queue!(stdout, Print("\n"))?;
    }
    Ok(())
}

fn print_permission(stdout: &mut impl Write, name: &str, allowed: bool) -> anyhow::Result<()> {
    let (color, label) = if allowed {
        (Color::Green, name.to_owned())
    } else {
        (Color::Red, format!("no{}", name))
    };
    queue!(
        stdout,
        SetForegroundColor(color),
        Print(format!(" {:<9}", label)),
        ResetColor
    )?;
    Ok(())
}
