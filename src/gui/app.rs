use iced::widget::{column, container, row, scrollable, text_editor, Rule, Text};
use iced::{theme, Application, Command, Element, Length, Size, Theme};
use std::sync::Arc;
use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::settings::Settings;
use crate::utils::api_client::AnalysisApiClient;
use super::constants::{
	DASHBOARD_INTRO, DASHBOARD_TITLE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, SIDEBAR_WIDTH,
	WINDOW_HEIGHT, WINDOW_WIDTH,
};
use super::formatters::MUTED_TEXT_COLOR;
use super::state::AppState;
use super::types::{editor_text, Message};
use super::views::ViewRenderer;

pub struct DashboardFlags {
	pub settings: Arc<Settings>,
	pub client: AnalysisApiClient,
}

pub struct DashboardApp {
	state: AppState,
	// Widget buffer for the requirement field; `state.requirement_text` mirrors it.
	editor: text_editor::Content,
	client: AnalysisApiClient,
}

impl Application for DashboardApp {
	type Executor = iced::executor::Default;
	type Message = Message;
	type Theme = Theme;
	type Flags = DashboardFlags;

	fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
		let app = DashboardApp {
			state: AppState::new(flags.settings),
			editor: text_editor::Content::new(),
			client: flags.client,
		};
		(app, Command::none())
	}

	fn title(&self) -> String {
		self.state.settings.project_name.clone()
	}

	fn update(&mut self, message: Message) -> Command<Message> {
		match message {
			Message::ModeSelected(mode) => {
				self.state.select_mode(mode);
				Command::none()
			}

			Message::RequirementEdited(action) => {
				// Selection and scrolling stay available while a request runs
				if action.is_edit() && !self.state.accepts_edits() {
					return Command::none();
				}
				self.editor.perform(action);
				self.state.set_requirement(editor_text(self.editor.text()));
				Command::none()
			}

			Message::AnalyzePressed => match self.state.begin_analysis() {
				Some(request) => {
					info!(
						"Submitting requirement for analysis in {} mode",
						request.analysis_mode
					);
					let client = self.client.clone();
					Command::perform(
						async move { client.analyze(&request).await },
						Message::AnalysisCompleted,
					)
				}
				None => {
					if !self.state.is_analyzing() {
						warn!("Analysis not started: requirement text is empty");
					}
					Command::none()
				}
			},

			Message::AnalysisCompleted(result) => {
				self.state.finish_analysis(result);
				Command::none()
			}

			Message::ClearPressed => {
				if self.state.clear() {
					self.editor = text_editor::Content::new();
				}
				Command::none()
			}
		}
	}

	fn view(&self) -> Element<Message> {
		let main = column![
			Text::new(DASHBOARD_TITLE).size(30),
			Text::new(DASHBOARD_INTRO)
				.size(15)
				.style(theme::Text::Color(MUTED_TEXT_COLOR)),
			Rule::horizontal(1),
			self.state.input_panel(&self.editor),
			self.state.outcome_panel(),
		]
			.spacing(16)
			.padding(20)
			.width(Length::Fill);

		let content = row![
			container(self.state.sidebar()).width(Length::Fixed(SIDEBAR_WIDTH)),
			scrollable(main).height(Length::Fill),
		]
			.spacing(10)
			.padding(10);

		container(content)
			.width(Length::Fill)
			.height(Length::Fill)
			.into()
	}

	fn theme(&self) -> Theme {
		Theme::Light
	}
}

pub fn run(settings: Arc<Settings>, client: AnalysisApiClient) -> Result<()> {
	let mut window = iced::Settings::with_flags(DashboardFlags { settings, client });
	window.window.size = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT);
	window.window.min_size = Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
	window.window.resizable = true;

	DashboardApp::run(window)
		.context("Failed to run security mapping dashboard")?;

	Ok(())
}
