//! Slash command parsing for the interactive session

use std::path::PathBuf;
use survey_domain::{BusinessType, CategoryKey, GapSource, SurveyTemplate};

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Redraw the question list
    Show,
    Context,
    SetType(BusinessType),
    SetIndustry(String),
    SetProduct(String),
    /// Toggle research areas on or off
    Area(Vec<CategoryKey>),
    Areas,
    Template(SurveyTemplate),
    Templates,
    Generate,
    More,
    Fill(Option<GapSource>),
    /// 1-based positions in the question list
    Toggle(Vec<usize>),
    All,
    None,
    Preview,
    Export(Option<PathBuf>),
    Copy,
    Tips,
    Clear,
}

/// Parse one input line.
///
/// A line of bare numbers toggles those questions. Everything else must
/// start with `/`.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();

    if line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return parse_positions(line).map(ReplCommand::Toggle);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Err(format!(
            "Unknown input: {}. Type /help for available commands",
            line
        ));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name.to_lowercase().as_str() {
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        "show" | "list" | "ls" => Ok(ReplCommand::Show),
        "context" | "info" => Ok(ReplCommand::Context),
        "type" => {
            require(arg, "/type <business type>")?;
            arg.parse()
                .map(ReplCommand::SetType)
                .map_err(|e| format!("{}", e))
        }
        "industry" => Ok(ReplCommand::SetIndustry(arg.to_string())),
        "product" => Ok(ReplCommand::SetProduct(arg.to_string())),
        "area" | "areas" if !arg.is_empty() => arg
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<CategoryKey>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map(ReplCommand::Area),
        "areas" | "area" => Ok(ReplCommand::Areas),
        "template" if !arg.is_empty() => arg
            .parse()
            .map(ReplCommand::Template)
            .map_err(|e: survey_domain::DomainError| e.to_string()),
        "templates" | "template" => Ok(ReplCommand::Templates),
        "generate" | "gen" | "g" => Ok(ReplCommand::Generate),
        "more" | "m" => Ok(ReplCommand::More),
        "fill" => {
            if arg.is_empty() {
                Ok(ReplCommand::Fill(None))
            } else {
                arg.parse()
                    .map(|gap| ReplCommand::Fill(Some(gap)))
                    .map_err(|e: survey_domain::DomainError| e.to_string())
            }
        }
        "toggle" | "t" => {
            require(arg, "/toggle <number>...")?;
            parse_positions(arg).map(ReplCommand::Toggle)
        }
        "all" => Ok(ReplCommand::All),
        "none" => Ok(ReplCommand::None),
        "preview" | "p" => Ok(ReplCommand::Preview),
        "export" | "save" => Ok(ReplCommand::Export(
            (!arg.is_empty()).then(|| PathBuf::from(arg)),
        )),
        "copy" => Ok(ReplCommand::Copy),
        "tips" => Ok(ReplCommand::Tips),
        "clear" => Ok(ReplCommand::Clear),
        _ => Err(format!(
            "Unknown command: /{}. Type /help for available commands",
            name
        )),
    }
}

fn require(arg: &str, usage: &str) -> Result<(), String> {
    if arg.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(())
    }
}

fn parse_positions(input: &str) -> Result<Vec<usize>, String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(0) | Err(_) => Err(format!("Not a question number: {}", s)),
            Ok(n) => Ok(n),
        })
        .collect()
}

/// Help text listing every command
pub const HELP: &str = "Commands:
  /type <type>          Set business type: b2b-saas, b2c-ecommerce, service-business,
                        consulting, agency, physical-product, course-education
  /industry <name>      Set industry (empty to clear)
  /product <text>       Describe your product or service
  /area <key>...        Toggle research areas (see /areas)
  /areas                List research areas
  /generate, /g         Generate questions from the selected areas
  /more, /m             Offer more questions, keeping your selection
  /template <key>       Start from a survey template (see /templates)
  /templates            List survey templates
  /fill [area|any]      Replace unselected template questions
  /toggle <n>..., <n>   Select or deselect questions by number
  /all, /none           Select all or clear the selection
  /show                 Show the question list
  /preview              Show the survey preview
  /context              Show the business details
  /export [path]        Save the survey to a text file
  /copy                 Copy the survey to the clipboard
  /tips                 Customer discovery best practices
  /clear                Start over with the same business details
  /help, /quit";
