//! Shell - Interactive Session
//!
//! Owns the store, the session gate, the toast queue and the history table
//! state. Each command runs its controller to completion on the shared
//! runtime, then drains store events into toasts before rendering.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};

use crate::app::cli::{ExportTarget, ShellCommand, parse_line, shell_help};
use crate::app::navigation::ActivePage;
use crate::constants::TOAST_CAPACITY;
use crate::domain::month::default_target;
use crate::features::{dashboard, history, insights};
use crate::features::dashboard::DashboardController;
use crate::features::history::HistoryController;
use crate::features::insights::InsightsController;
use crate::i18n::{Locale, t};
use crate::services::{ForecastApi, block_on};
use crate::states::{
    AppConfig, HistoryTableState, Operation, PredictionStore, Session, ToastCenter, UIEvent,
    parse_filter_choice,
};

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print
    Output(String),
    /// Leave the session
    Quit,
}

pub struct Shell<A> {
    store: PredictionStore<A>,
    events: Sender<UIEvent>,
    receiver: Receiver<UIEvent>,
    toasts: ToastCenter,
    session: Session,
    history_table: HistoryTableState,
    page: ActivePage,
    config: AppConfig,
    locale: Locale,
}

impl<A: ForecastApi> Shell<A> {
    pub fn new(api: A, config: AppConfig) -> Self {
        let locale = config.locale();
        let (events, receiver) = crossbeam_channel::unbounded();

        Self {
            store: PredictionStore::new(api, events.clone(), locale),
            events,
            receiver,
            toasts: ToastCenter::new(config.toast_ttl(), TOAST_CAPACITY),
            session: Session::new(),
            history_table: HistoryTableState::new(config.history_page_size()),
            page: ActivePage::default(),
            config,
            locale,
        }
    }

    pub fn store(&self) -> &PredictionStore<A> {
        &self.store
    }

    pub fn toasts(&self) -> &ToastCenter {
        &self.toasts
    }

    pub fn page(&self) -> ActivePage {
        self.page
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        writeln!(output, "{}", t(self.locale, "shell-banner"))?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(command) => match self.execute(command) {
                    Reply::Output(text) => writeln!(output, "{text}")?,
                    Reply::Quit => break,
                },
                Err(e) => writeln!(output, "{e}")?,
            }
        }

        writeln!(output, "{}", t(self.locale, "shell-bye"))?;
        Ok(())
    }

    /// Run one command and render its result with any new toasts
    pub fn execute(&mut self, command: ShellCommand) -> Reply {
        tracing::debug!(?command, "Shell command");

        let gated = !matches!(
            command,
            ShellCommand::Login { .. } | ShellCommand::Help | ShellCommand::Quit
        );
        if gated && !self.session.is_logged_in() {
            return Reply::Output(t(self.locale, "login-required").to_string());
        }

        let seen: HashSet<_> = self.toasts.active().map(|toast| toast.id).collect();
        let body = match command {
            ShellCommand::Quit => return Reply::Quit,
            ShellCommand::Help => shell_help(),
            ShellCommand::Login { email, password } => self.login(&email, &password),
            ShellCommand::Logout => self.logout(),
            ShellCommand::Dashboard => self.show_dashboard(),
            ShellCommand::Insights => self.show_insights(),
            ShellCommand::History {
                search,
                month,
                year,
                page,
            } => self.show_history(search, month, year, page),
            ShellCommand::Upload { path } => {
                block_on(DashboardController::new(&self.store, self.events.clone()).upload(&path));
                self.page = ActivePage::Dashboard;
                self.render_page()
            }
            ShellCommand::Predict { month, year } => {
                let (default_month, default_year) = default_target(Local::now().date_naive());
                let month = month.unwrap_or_else(|| default_month.to_string());
                let year = year.unwrap_or(default_year);
                block_on(
                    DashboardController::new(&self.store, self.events.clone()).predict(&month, year),
                );
                self.page = ActivePage::Dashboard;
                self.render_page()
            }
            ShellCommand::Export { target, dir } => self.export(target, dir),
            ShellCommand::Toasts => {
                self.drain_events();
                return Reply::Output(self.list_toasts());
            }
            ShellCommand::Dismiss { id } => {
                self.drain_events();
                let key = if self.toasts.dismiss(id) {
                    "toast-dismissed"
                } else {
                    "toast-not-found"
                };
                return Reply::Output(t(self.locale, key).to_string());
            }
            ShellCommand::Status => self.status(),
        };

        self.drain_events();
        let mut lines: Vec<String> = Some(body).filter(|body| !body.is_empty()).into_iter().collect();
        for toast in self.toasts.active().filter(|toast| !seen.contains(&toast.id)) {
            lines.push(format!("[{}] {}", toast.severity.tag(), toast.message));
        }
        Reply::Output(lines.join("\n"))
    }

    // ==================== Commands ====================

    fn login(&mut self, email: &str, password: &str) -> String {
        if self.session.login(email, password).is_err() {
            return t(self.locale, "login-invalid").to_string();
        }

        self.page = ActivePage::Dashboard;
        format!("{}\n{}", t(self.locale, "login-welcome"), self.show_dashboard())
    }

    fn logout(&mut self) -> String {
        self.session.logout(&self.store);
        self.history_table = HistoryTableState::new(self.config.history_page_size());
        self.page = ActivePage::default();
        self.drain_events();
        self.toasts.clear();
        crate::features::notify(&self.events, UIEvent::info(t(self.locale, "toast-logged-out")));
        String::new()
    }

    fn show_dashboard(&mut self) -> String {
        self.page = ActivePage::Dashboard;
        block_on(DashboardController::new(&self.store, self.events.clone()).mount());
        self.render_page()
    }

    fn show_insights(&mut self) -> String {
        self.page = ActivePage::Insights;
        block_on(InsightsController::new(&self.store, self.events.clone()).mount());
        self.render_page()
    }

    fn show_history(
        &mut self,
        search: Option<String>,
        month: Option<String>,
        year: Option<String>,
        page: Option<usize>,
    ) -> String {
        self.page = ActivePage::History;
        block_on(HistoryController::new(&self.store, self.events.clone()).mount());

        if let Some(search) = search {
            self.history_table.set_search(search);
        }
        if let Some(month) = month {
            self.history_table.set_month(parse_filter_choice(&month));
        }
        if let Some(year) = year {
            self.history_table.set_year(parse_filter_choice(&year));
        }
        if let Some(page) = page {
            let rows = self.store.history();
            let filtered = self.history_table.filtered(&rows).len();
            self.history_table.set_page(page, filtered);
        }

        self.render_page()
    }

    fn export(&self, target: ExportTarget, dir: Option<PathBuf>) -> String {
        let dir = dir.unwrap_or_else(|| self.config.export_dir());
        let events = self.events.clone();

        let written = match target {
            ExportTarget::Forecast => {
                DashboardController::new(&self.store, events).export_forecast(&dir)
            }
            ExportTarget::Prediction => {
                DashboardController::new(&self.store, events).export_prediction(&dir)
            }
            ExportTarget::History => HistoryController::new(&self.store, events)
                .export_filtered(&self.history_table, &dir),
            ExportTarget::Insights => {
                InsightsController::new(&self.store, events).export_report(&dir)
            }
        };

        match written {
            Some(path) => format!("{}: {}", t(self.locale, "export-saved"), path.display()),
            None => String::new(),
        }
    }

    fn status(&self) -> String {
        let state = self.store.snapshot();
        let loading: Vec<&str> = Operation::ALL
            .iter()
            .filter(|op| state.status.is_loading(**op))
            .map(|op| op.name())
            .collect();
        let none = t(self.locale, "status-none");

        [
            format!(
                "{}: {}",
                t(self.locale, "status-user"),
                self.session.user().unwrap_or(&*none)
            ),
            format!("{}: {}", t(self.locale, "status-api"), self.config.api_base_url),
            format!("{}: {}", t(self.locale, "status-page"), t(self.locale, self.page.title_key())),
            format!("{}: {}", t(self.locale, "status-language"), self.locale.display_name()),
            format!(
                "{}: {}",
                t(self.locale, "status-loading"),
                if loading.is_empty() {
                    none.to_string()
                } else {
                    loading.join(", ")
                }
            ),
            format!(
                "{}: {}",
                t(self.locale, "status-last-error"),
                state.last_error.as_deref().unwrap_or(&*none)
            ),
        ]
        .join("\n")
    }

    fn list_toasts(&self) -> String {
        if self.toasts.is_empty() {
            return t(self.locale, "toasts-empty").to_string();
        }
        self.toasts
            .active()
            .map(|toast| format!("{} [{}] {}", toast.id, toast.severity.tag(), toast.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ==================== Internals ====================

    fn render_page(&mut self) -> String {
        let state = self.store.snapshot();
        let mut text = match self.page {
            ActivePage::Dashboard => dashboard::render(&state, self.locale),
            ActivePage::Insights => insights::render(&state, self.locale),
            ActivePage::History => history::render(&state, &mut self.history_table, self.locale),
        };
        if let Some(error) = &state.last_error {
            text.push_str(&format!("\n! {error}"));
        }
        text
    }

    fn drain_events(&mut self) {
        let changed = self.toasts.ingest(&self.receiver);
        if !changed.is_empty() {
            tracing::trace!(?changed, "Store state changed");
        }
        self.toasts.prune_expired(Instant::now());
    }
}
