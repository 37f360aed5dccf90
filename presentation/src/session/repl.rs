//! Interactive survey builder session

use super::command::{HELP, ReplCommand, parse_command};
use crate::config::ReplConfig;
use crate::output::{ConsoleFormatter, ResizeTracker};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use survey_application::{
    BuildSurveyUseCase, ExportError, ExportSurveyUseCase, HostNotifier, NoHostNotifier,
};
use survey_domain::{GapSource, SurveySession, ToggleOutcome};
use tracing::debug;

/// What executing one command produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplOutcome {
    pub output: String,
    pub exit: bool,
}

impl ReplOutcome {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: false,
        }
    }
}

/// Interactive survey REPL
pub struct SurveyRepl {
    session: SurveySession,
    builder: BuildSurveyUseCase,
    exporter: ExportSurveyUseCase,
    resize: ResizeTracker,
    config: ReplConfig,
    gap: GapSource,
}

impl SurveyRepl {
    pub fn new(builder: BuildSurveyUseCase, exporter: ExportSurveyUseCase) -> Self {
        Self {
            session: SurveySession::default(),
            builder,
            exporter,
            resize: ResizeTracker::new(Arc::new(NoHostNotifier)),
            config: ReplConfig::default(),
            gap: GapSource::Any,
        }
    }

    /// Start from an existing session (e.g. business details from flags)
    pub fn with_session(mut self, session: SurveySession) -> Self {
        self.session = session;
        self
    }

    pub fn with_host_notifier(mut self, notifier: Arc<dyn HostNotifier>) -> Self {
        self.resize = ResizeTracker::new(notifier);
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Default source for `/fill` without an argument
    pub fn with_gap(mut self, gap: GapSource) -> Self {
        self.gap = gap;
        self
    }

    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.resolved_history_file();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("survey> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    let outcome = match parse_command(line) {
                        Ok(cmd) => self.execute(cmd).await,
                        Err(e) => {
                            let outcome = ReplOutcome::text(e.yellow().to_string());
                            self.resize.observe(&outcome.output);
                            outcome
                        }
                    };
                    if !outcome.output.is_empty() {
                        println!("{}", outcome.output);
                    }
                    if outcome.exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      Customer Discovery Survey Creator      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Tell us about your business with /type and /product,");
        println!("pick research areas with /area, then /generate.");
        println!("Or start from a ready-made survey with /template.");
        println!("Type /help for all commands.");
        println!();
    }

    /// Apply one command to the session
    pub async fn execute(&mut self, cmd: ReplCommand) -> ReplOutcome {
        debug!("Executing {:?}", cmd);
        let outcome = self.apply(cmd).await;
        if !outcome.exit && !outcome.output.is_empty() {
            self.resize.observe(&outcome.output);
        }
        outcome
    }

    async fn apply(&mut self, cmd: ReplCommand) -> ReplOutcome {
        let max_selected = self.builder.policy().max_selected;
        let cmd_is_more = cmd == ReplCommand::More;

        match cmd {
            ReplCommand::Help => ReplOutcome::text(HELP),
            ReplCommand::Quit => ReplOutcome {
                output: "Bye!".to_string(),
                exit: true,
            },
            ReplCommand::Show => ReplOutcome::text(self.render_view()),
            ReplCommand::Context => {
                ReplOutcome::text(ConsoleFormatter::format_context(&self.session))
            }
            ReplCommand::SetType(business_type) => {
                self.session.context.business_type = Some(business_type);
                ReplOutcome::text(format!("Business type set to {}.", business_type.label()))
            }
            ReplCommand::SetIndustry(industry) => {
                let message = if industry.is_empty() {
                    "Industry cleared.".to_string()
                } else {
                    format!("Industry set to {}.", industry)
                };
                self.session.context.industry = industry;
                ReplOutcome::text(message)
            }
            ReplCommand::SetProduct(product) => {
                let message = if product.is_empty() {
                    "Product/service cleared.".to_string()
                } else {
                    "Product/service updated.".to_string()
                };
                self.session.context.product_service = product;
                ReplOutcome::text(message)
            }
            ReplCommand::Area(keys) => {
                for key in keys {
                    self.session.context.toggle_category(key);
                }
                ReplOutcome::text(format!(
                    "{}Run /generate to refresh the questions.",
                    ConsoleFormatter::format_categories(
                        &self.session.context,
                        self.builder.policy()
                    )
                ))
            }
            ReplCommand::Areas => ReplOutcome::text(ConsoleFormatter::format_categories(
                &self.session.context,
                self.builder.policy(),
            )),
            ReplCommand::Template(template) => {
                let summary = self.builder.apply_template(&mut self.session, template);
                self.summary_and_view(ConsoleFormatter::format_summary(&summary))
            }
            ReplCommand::Templates => {
                ReplOutcome::text(ConsoleFormatter::format_templates(self.session.template()))
            }
            ReplCommand::Generate | ReplCommand::More => {
                let result = if cmd_is_more {
                    self.builder.add_more(&mut self.session)
                } else {
                    self.builder.generate(&mut self.session)
                };
                match result {
                    Ok(summary) => {
                        self.summary_and_view(ConsoleFormatter::format_summary(&summary))
                    }
                    Err(e) => ReplOutcome::text(format!("{}", e.to_string().yellow())),
                }
            }
            ReplCommand::Fill(gap) => {
                let gap = gap.unwrap_or(self.gap);
                match self.builder.fill_gaps(&mut self.session, gap) {
                    Ok(summary) => {
                        self.summary_and_view(ConsoleFormatter::format_summary(&summary))
                    }
                    Err(e) => ReplOutcome::text(format!(
                        "{} Choose one with /template first.",
                        e.to_string().yellow()
                    )),
                }
            }
            ReplCommand::Toggle(positions) => {
                let mut notes = Vec::new();
                for position in positions {
                    match self.session.toggle_index(position - 1, max_selected) {
                        ToggleOutcome::Selected | ToggleOutcome::Deselected => {}
                        ToggleOutcome::LimitReached => notes.push(format!(
                            "You can select up to {} questions.",
                            max_selected
                        )),
                        ToggleOutcome::NotFound => {
                            notes.push(format!("There is no question {}.", position))
                        }
                    }
                }
                notes.dedup();
                self.summary_and_view(notes.join("\n"))
            }
            ReplCommand::All => {
                self.session.select_all();
                self.summary_and_view(String::new())
            }
            ReplCommand::None => {
                self.session.deselect_all();
                self.summary_and_view(String::new())
            }
            ReplCommand::Preview => {
                ReplOutcome::text(ConsoleFormatter::format_preview(&self.session))
            }
            ReplCommand::Export(path) => {
                let result = match path {
                    Some(path) => self.exporter.export_to_path(&self.session, &path),
                    None => self
                        .exporter
                        .export_to_file(&self.session, &self.config.export_dir),
                };
                match result {
                    Ok(path) => ReplOutcome::text(format!(
                        "{} {}",
                        "Survey saved to".green(),
                        path.display()
                    )),
                    Err(e) => ReplOutcome::text(export_error_message(&e)),
                }
            }
            ReplCommand::Copy => match self.exporter.copy_to_clipboard(&self.session).await {
                Ok(notice) if notice.is_success() => {
                    ReplOutcome::text(notice.message().green().to_string())
                }
                Ok(notice) => ReplOutcome::text(format!(
                    "{}\n{}",
                    notice.message().yellow(),
                    self.exporter
                        .render(&self.session, survey_domain::ExportVariant::Clipboard)
                )),
                Err(e) => ReplOutcome::text(export_error_message(&e)),
            },
            ReplCommand::Tips => ReplOutcome::text(ConsoleFormatter::format_tips()),
            ReplCommand::Clear => {
                self.session.clear();
                self.session.set_template(None);
                self.summary_and_view("Survey cleared.".to_string())
            }
        }
    }

    fn render_view(&self) -> String {
        ConsoleFormatter::format_view(&self.session, self.config.show_preview)
    }

    fn summary_and_view(&self, summary: String) -> ReplOutcome {
        let view = self.render_view();
        if summary.is_empty() {
            ReplOutcome::text(view)
        } else {
            ReplOutcome::text(format!("{}\n{}", summary, view))
        }
    }
}

fn export_error_message(error: &ExportError) -> String {
    match error {
        ExportError::NothingSelected => "Select at least one question first."
            .yellow()
            .to_string(),
        ExportError::Write(e) => format!("{} {}", "Export failed:".red(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use survey_application::{
        ClipboardError, ClipboardPort, HostMessage, SurveyWriterPort, WriteError,
    };
    use survey_domain::{
        BusinessContext, BusinessType, CategoryKey, SelectionPolicy, SurveyTemplate,
    };

    struct FailingClipboard;

    #[async_trait]
    impl ClipboardPort for FailingClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::NotAvailable("headless".into()))
        }
    }

    #[derive(Default, Clone)]
    struct MemoryWriter(Arc<Mutex<Vec<(PathBuf, String)>>>);

    impl SurveyWriterPort for MemoryWriter {
        fn write(&self, path: &Path, contents: &str) -> Result<PathBuf, WriteError> {
            self.0
                .lock()
                .unwrap()
                .push((path.to_path_buf(), contents.to_string()));
            Ok(path.to_path_buf())
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<HostMessage>>);

    impl HostNotifier for Recorder {
        fn notify(&self, message: HostMessage) {
            self.0.lock().unwrap().push(message);
        }
    }

    fn repl(writer: MemoryWriter) -> SurveyRepl {
        colored::control::set_override(false);
        SurveyRepl::new(
            BuildSurveyUseCase::with_seed(SelectionPolicy::default(), 7),
            ExportSurveyUseCase::new(Arc::new(FailingClipboard), Arc::new(writer)),
        )
        .with_config(ReplConfig {
            show_preview: false,
            history_file: None,
            export_dir: PathBuf::from("out"),
        })
    }

    async fn run(repl: &mut SurveyRepl, line: &str) -> ReplOutcome {
        repl.execute(parse_command(line).unwrap()).await
    }

    #[tokio::test]
    async fn test_generate_requires_details() {
        let mut repl = repl(MemoryWriter::default());
        let outcome = run(&mut repl, "/generate").await;
        assert!(outcome.output.contains("Missing business type"));
        assert!(repl.session().generated().is_empty());
    }

    #[tokio::test]
    async fn test_generate_flow() {
        let mut repl = repl(MemoryWriter::default());
        run(&mut repl, "/type agency").await;
        run(&mut repl, "/product brand strategy").await;
        run(&mut repl, "/area motivations language").await;
        assert_eq!(
            repl.session().context.categories(),
            &[CategoryKey::Motivations, CategoryKey::Language]
        );

        let outcome = run(&mut repl, "/generate").await;
        assert!(outcome.output.contains("Available Questions (6 of 8 selected)"));
        assert_eq!(repl.session().selected().len(), 6);

        run(&mut repl, "1").await;
        assert_eq!(repl.session().selected().len(), 5);

        run(&mut repl, "/none").await;
        assert!(repl.session().selected().is_empty());
    }

    #[tokio::test]
    async fn test_template_then_fill() {
        let mut repl = repl(MemoryWriter::default());
        run(&mut repl, "/template existing-product").await;
        assert_eq!(repl.session().template(), Some(SurveyTemplate::ExistingProduct));
        assert_eq!(repl.session().selected().len(), 5);

        run(&mut repl, "/toggle 1").await;
        let outcome = run(&mut repl, "/fill").await;
        assert!(outcome.output.contains("Added 1 new question (5 shown, 4 selected)."));
        assert_eq!(repl.session().generated().len(), 5);
    }

    #[tokio::test]
    async fn test_fill_without_template() {
        let mut repl = repl(MemoryWriter::default());
        let outcome = run(&mut repl, "/fill").await;
        assert!(outcome.output.contains("No survey template is active"));
    }

    #[tokio::test]
    async fn test_toggle_out_of_range() {
        let mut repl = repl(MemoryWriter::default());
        run(&mut repl, "/template new-product").await;
        let outcome = run(&mut repl, "9").await;
        assert!(outcome.output.contains("There is no question 9."));
    }

    #[tokio::test]
    async fn test_export_writes_full_document() {
        let writer = MemoryWriter::default();
        let mut repl = repl(writer.clone());

        let outcome = run(&mut repl, "/export").await;
        assert!(outcome.output.contains("Select at least one question"));

        run(&mut repl, "/template churned-customers").await;
        let outcome = run(&mut repl, "/export").await;
        assert!(outcome.output.contains("Survey saved to"));

        let written = writer.0.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(
            written[0].0,
            PathBuf::from("out").join(survey_domain::EXPORT_FILE_NAME)
        );
        assert!(written[0].1.contains("\n1. "));
    }

    #[tokio::test]
    async fn test_copy_failure_shows_text() {
        let mut repl = repl(MemoryWriter::default());
        run(&mut repl, "/template service-launch").await;
        let outcome = run(&mut repl, "/copy").await;
        assert!(outcome.output.contains("Copy failed"));
        assert!(outcome.output.contains(&repl.session().selected()[0]));
    }

    #[tokio::test]
    async fn test_view_changes_post_resize() {
        let recorder = Arc::new(Recorder::default());
        let mut repl = repl(MemoryWriter::default()).with_host_notifier(recorder.clone());

        run(&mut repl, "/show").await;
        run(&mut repl, "/show").await;
        run(&mut repl, "/template new-product").await;

        assert_eq!(recorder.0.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_every_output_feeds_resize() {
        let recorder = Arc::new(Recorder::default());
        let mut repl = repl(MemoryWriter::default()).with_host_notifier(recorder.clone());

        run(&mut repl, "/template new-product").await;
        run(&mut repl, "1").await;
        assert_eq!(recorder.0.lock().unwrap().len(), 2);

        // The list keeps its height on a second toggle
        run(&mut repl, "2").await;
        assert_eq!(recorder.0.lock().unwrap().len(), 2);

        run(&mut repl, "/preview").await;
        let messages = recorder.0.lock().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2], HostMessage::Resize { height: 9 });
    }

    #[tokio::test]
    async fn test_quit() {
        let mut repl = repl(MemoryWriter::default()).with_session(SurveySession::new(
            BusinessContext::new().with_business_type(BusinessType::Consulting),
        ));
        assert!(run(&mut repl, "/quit").await.exit);
        assert_eq!(
            repl.session().context.business_type,
            Some(BusinessType::Consulting)
        );
    }
}
