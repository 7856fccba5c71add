use super::constants::{
	EDITOR_HEIGHT, INCOMPLETE_WARNING, MODE_HELP, NO_FRAMEWORK_MATCHES, NO_LONG_TERM,
	NO_SHORT_TERM, REQUIREMENT_EXAMPLE, REQUIREMENT_PROMPT, SUPPORTED_FRAMEWORKS,
};
use super::formatters::{
	ai_status_color, format_cve_list, format_progress, format_risk_badge, format_run_info,
	risk_color, ERROR_TEXT_COLOR, INFO_TEXT_COLOR, MUTED_TEXT_COLOR, SUCCESS_TEXT_COLOR,
	WARNING_TEXT_COLOR,
};
use super::state::AppState;
use super::types::{Message, Outcome};
use crate::models::analysis::{AnalysisMode, AnalysisResponse, FrameworkMatch};
use iced::{
	alignment::Horizontal,
	theme,
	widget::{
		button, column, container, radio, row, text_editor, Column, Rule, Space, Text,
	},
	Alignment, Background, Border, Color, Element, Length, Theme,
};

pub trait ViewRenderer {
	fn sidebar(&self) -> Element<Message>;
	fn input_panel<'a>(&'a self, editor: &'a text_editor::Content) -> Element<'a, Message>;
	fn outcome_panel(&self) -> Element<Message>;
	fn results_panel<'a>(&self, result: &'a AnalysisResponse) -> Element<'a, Message>;
	fn risk_badge<'a>(&self, risk_level: &str) -> Element<'a, Message>;
	fn framework_list<'a>(&self, matches: &'a [FrameworkMatch]) -> Element<'a, Message>;
	fn suggestion_list<'a>(
		&self,
		title: &'a str,
		items: &'a [String],
		marker: &'a str,
		empty_message: &'a str,
	) -> Element<'a, Message>;
}

impl ViewRenderer for AppState {
	fn sidebar(&self) -> Element<Message> {
		let modes = AnalysisMode::ALL.iter().fold(
			Column::new().spacing(8),
			|col, mode| {
				col.push(
					radio(mode.label(), *mode, Some(self.mode), Message::ModeSelected)
						.size(16)
						.text_size(15),
				)
			},
		);

		let frameworks = SUPPORTED_FRAMEWORKS.iter().fold(
			Column::new().spacing(6),
			|col, name| {
				col.push(
					Text::new(format!("✔ {}", name))
						.size(14)
						.style(theme::Text::Color(SUCCESS_TEXT_COLOR)),
				)
			},
		);

		container(
			column![
				Text::new("Analiz Ayarları").size(22),
				Text::new("Analiz Modunu Seçin:").size(15),
				modes,
				Text::new(MODE_HELP)
					.size(12)
					.style(theme::Text::Color(MUTED_TEXT_COLOR)),
				row![
					Text::new("Yapay Zeka Durumu:").size(14),
					Text::new("● Mevcut")
						.size(14)
						.style(theme::Text::Color(ai_status_color(self.mode))),
				]
				.spacing(6),
				Rule::horizontal(1),
				Text::new("Desteklenen Çerçeveler").size(18),
				frameworks,
				Rule::horizontal(1),
				Text::new("Servis").size(18),
				Text::new(format!("Backend: {}", self.settings.analyze_url()))
					.size(12)
					.style(theme::Text::Color(MUTED_TEXT_COLOR)),
				Text::new(format!(
					"LLM: {} @ {}",
					self.settings.llm_model_name, self.settings.ollama_base_url
				))
				.size(12)
				.style(theme::Text::Color(MUTED_TEXT_COLOR)),
			]
				.spacing(12),
		)
			.style(theme::Container::Box)
			.padding(15)
			.height(Length::Fill)
			.into()
	}

	fn input_panel<'a>(&'a self, editor: &'a text_editor::Content) -> Element<'a, Message> {
		let analyzing = self.is_analyzing();

		let mut analyze = button(
			Text::new("Gereksinimi Analiz Et")
				.size(16)
				.horizontal_alignment(Horizontal::Center),
		)
			.style(theme::Button::Primary)
			.padding(12);
		let mut clear = button(Text::new("Temizle").size(16))
			.style(theme::Button::Secondary)
			.padding(12);
		if !analyzing {
			analyze = analyze.on_press(Message::AnalyzePressed);
			clear = clear.on_press(Message::ClearPressed);
		}

		let progress: Element<Message> = if analyzing {
			Text::new(format_progress(self.mode))
				.size(15)
				.style(theme::Text::Color(INFO_TEXT_COLOR))
				.into()
		} else {
			Space::with_height(Length::Shrink).into()
		};

		column![
			Text::new("Sistem Genel Bakışı").size(24),
			Text::new(REQUIREMENT_PROMPT).size(15),
			Text::new(REQUIREMENT_EXAMPLE)
				.size(12)
				.style(theme::Text::Color(MUTED_TEXT_COLOR)),
			text_editor(editor)
				.on_action(Message::RequirementEdited)
				.height(Length::Fixed(EDITOR_HEIGHT))
				.padding(10),
			row![analyze, clear, progress]
				.spacing(12)
				.align_items(Alignment::Center),
		]
			.spacing(10)
			.into()
	}

	fn outcome_panel(&self) -> Element<Message> {
		match &self.outcome {
			None => Space::with_height(Length::Shrink).into(),
			Some(Outcome::Invalid(err)) => Text::new(err.to_string())
				.size(16)
				.style(theme::Text::Color(WARNING_TEXT_COLOR))
				.into(),
			Some(Outcome::Failed(err)) => container(
				Text::new(err.to_string())
					.size(16)
					.style(theme::Text::Color(ERROR_TEXT_COLOR)),
			)
				.style(theme::Container::Box)
				.padding(12)
				.width(Length::Fill)
				.into(),
			Some(Outcome::Incomplete) => Text::new(INCOMPLETE_WARNING)
				.size(16)
				.style(theme::Text::Color(WARNING_TEXT_COLOR))
				.into(),
			Some(Outcome::Results(result)) => self.results_panel(result),
		}
	}

	fn results_panel<'a>(&self, result: &'a AnalysisResponse) -> Element<'a, Message> {
		let mut overview = Column::new()
			.spacing(10)
			.push(Text::new("Genel Özet ve Etki Analizi").size(20))
			.push(
				container(
					Text::new(&result.summary)
						.size(15)
						.style(theme::Text::Color(INFO_TEXT_COLOR)),
				)
				.style(theme::Container::Box)
				.padding(10)
				.width(Length::Fill),
			);

		if !result.cve_id_matches.is_empty() {
			overview = overview
				.push(Text::new("İlgili CVE ID'leri:").size(15))
				.push(
					container(Text::new(format_cve_list(&result.cve_id_matches)).size(14))
						.style(theme::Container::Box)
						.padding(8)
						.width(Length::Fill),
				);
		}

		overview = overview
			.push(Text::new("Eşleşen Çerçeveler (Nedenleri)").size(20))
			.push(self.framework_list(&result.framework_matches));

		let plan = column![
			Text::new("İki Aşamalı Çözüm Planı").size(20),
			self.suggestion_list(
				"1. Kısa Vadeli Acil Önlemler",
				&result.suggestions.short_term,
				"✔",
				NO_SHORT_TERM,
			),
			self.suggestion_list(
				"2. Uzun Vadeli Stratejik Önlemler",
				&result.suggestions.long_term,
				"+",
				NO_LONG_TERM,
			),
		]
			.spacing(12);

		column![
			Rule::horizontal(1),
			self.risk_badge(&result.risk_level),
			Text::new(format_run_info(&result.mode_used, result.processing_time_ms)).size(15),
			Rule::horizontal(1),
			row![
				container(overview).width(Length::FillPortion(1)),
				container(plan).width(Length::FillPortion(2)),
			]
				.spacing(20),
		]
			.spacing(14)
			.into()
	}

	fn risk_badge<'a>(&self, risk_level: &str) -> Element<'a, Message> {
		container(
			Text::new(format_risk_badge(risk_level))
				.size(22)
				.horizontal_alignment(Horizontal::Center)
				.width(Length::Fill),
		)
			.style(theme::Container::Custom(Box::new(RiskBadge(risk_color(risk_level)))))
			.padding(10)
			.width(Length::Fill)
			.into()
	}

	fn framework_list<'a>(&self, matches: &'a [FrameworkMatch]) -> Element<'a, Message> {
		if matches.is_empty() {
			return Text::new(NO_FRAMEWORK_MATCHES)
				.size(14)
				.style(theme::Text::Color(INFO_TEXT_COLOR))
				.into();
		}

		Column::with_children(
			matches
				.iter()
				.map(|m| {
					let mut entry = Column::new().spacing(2).push(
						row![
							Text::new(format!("{}:", m.framework)).size(15),
							Text::new(&m.label).size(15),
						]
						.spacing(6),
					);
					if m.has_explanation() {
						entry = entry.push(
							Text::new(format!("Açıklama: {}", m.explanation))
								.size(12)
								.style(theme::Text::Color(MUTED_TEXT_COLOR)),
						);
					}
					entry.into()
				})
				.collect::<Vec<Element<'a, Message>>>(),
		)
			.spacing(8)
			.into()
	}

	fn suggestion_list<'a>(
		&self,
		title: &'a str,
		items: &'a [String],
		marker: &'a str,
		empty_message: &'a str,
	) -> Element<'a, Message> {
		let body: Element<'a, Message> = if items.is_empty() {
			Text::new(empty_message)
				.size(14)
				.style(theme::Text::Color(WARNING_TEXT_COLOR))
				.into()
		} else {
			Column::with_children(
				items
					.iter()
					.map(|item| {
						container(Text::new(format!("{} {}", marker, item)).size(14))
							.style(theme::Container::Box)
							.padding(8)
							.width(Length::Fill)
							.into()
					})
					.collect::<Vec<Element<'a, Message>>>(),
			)
				.spacing(6)
				.into()
		};

		column![Text::new(title).size(16), body]
			.spacing(8)
			.into()
	}
}

/// Solid badge behind the risk level text.
struct RiskBadge(Color);

impl container::StyleSheet for RiskBadge {
	type Style = Theme;

	fn appearance(&self, _style: &Self::Style) -> container::Appearance {
		container::Appearance {
			text_color: Some(Color::WHITE),
			background: Some(Background::Color(self.0)),
			border: Border {
				radius: 5.0.into(),
				..Border::default()
			},
			..container::Appearance::default()
		}
	}
}
