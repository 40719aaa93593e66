// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact section: message form, contact details and social links.

use super::{card, palette::Palette, section_heading, PageAction};
use crate::models::content::SiteContent;
use crate::state::contact::{ContactForm, SubmissionState};
use crate::state::nav::{Navigation, Section};
use crate::util::links;

/// Below this width the form and the details stack vertically.
const STACK_WIDTH: f32 = 820.0;

pub fn show(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    content: &SiteContent,
    nav: &mut Navigation,
    palette: &Palette,
) -> PageAction {
    let mut action = PageAction::None;
    section_heading(
        ui,
        nav,
        Section::Contact,
        &content.contact.heading,
        Some(&content.contact.intro),
        palette,
    );

    if ui.available_width() < STACK_WIDTH {
        if let Some(a) = message_form(ui, form, &content.owner.email, palette) {
            action = a;
        }
        ui.add_space(24.0);
        if let Some(a) = details(ui, content, palette) {
            action = a;
        }
    } else {
        ui.columns(2, |cols| {
            if let Some(a) = message_form(&mut cols[0], form, &content.owner.email, palette) {
                action = a;
            }
            if let Some(a) = details(&mut cols[1], content, palette) {
                action = a;
            }
        });
    }

    action
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, multiline: bool) {
    ui.label(egui::RichText::new(label).strong());
    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(5)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(edit.hint_text(hint).desired_width(f32::INFINITY));
    ui.add_space(12.0);
}

fn message_form(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    fallback_email: &str,
    palette: &Palette,
) -> Option<PageAction> {
    card(ui, palette, |ui| {
        let mut action = None;
        ui.label(egui::RichText::new("Send a Message").size(22.0).strong());
        ui.add_space(16.0);

        let submitting = form.state() == SubmissionState::Submitting;
        ui.add_enabled_ui(!submitting, |ui| {
            field(ui, "Name *", &mut form.fields.name, "Your full name", false);
            field(ui, "Email *", &mut form.fields.email, "your.email@example.com", false);
            field(ui, "Phone Number (optional)", &mut form.fields.phone, "+60123456789", false);
            field(ui, "Message *", &mut form.fields.message, "Tell me about your project...", true);
        });

        let label = if submitting { "Sending..." } else { "➤ Send Message" };
        ui.horizontal(|ui| {
            let button = egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
                .fill(palette.accent)
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if submitting {
                ui.spinner();
            }
            if ui.add_enabled(form.can_submit(), button).clicked() {
                action = Some(PageAction::SendMessage);
            }
        });

        match form.state() {
            SubmissionState::Success => {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("✅ Message sent successfully! I'll get back to you soon.")
                        .color(palette.success),
                );
            }
            SubmissionState::Error => {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("❌ Failed to send message. Please try again or email me directly at")
                        .color(palette.error),
                );
                if ui.link(fallback_email).clicked() {
                    action = Some(PageAction::OpenUrl(links::mailto_plain(fallback_email)));
                }
            }
            SubmissionState::Idle | SubmissionState::Submitting => {}
        }

        action
    })
}

fn details(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) -> Option<PageAction> {
    let mut action = None;
    let owner = &content.owner;

    ui.label(egui::RichText::new("Get in Touch").size(22.0).strong());
    ui.add_space(12.0);
    ui.label(egui::RichText::new(&content.contact.blurb).color(palette.muted));
    ui.add_space(16.0);

    for (icon, title, value) in [
        ("✉", "Email", owner.email.as_str()),
        ("📍", "Location", owner.location.as_str()),
        ("🕑", "Response Time", owner.response_time.as_str()),
    ] {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).size(22.0).color(palette.accent));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(title).strong());
                ui.label(egui::RichText::new(value).color(palette.muted));
            });
        });
        ui.add_space(12.0);
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Connect With Me").size(16.0).strong());
    ui.horizontal(|ui| {
        if let Some(a) = social_buttons(ui, content) {
            action = Some(a);
        }
    });

    action
}

/// LinkedIn, GitHub and a pre-filled inquiry email.
pub fn social_buttons(ui: &mut egui::Ui, content: &SiteContent) -> Option<PageAction> {
    let owner = &content.owner;
    let mut action = None;

    if ui.button("in").on_hover_text("LinkedIn").clicked() {
        action = Some(PageAction::OpenUrl(owner.linkedin_url.clone()));
    }
    if ui.button("GitHub").on_hover_text("GitHub").clicked() {
        action = Some(PageAction::OpenUrl(owner.github_url.clone()));
    }
    if ui.button("✉").on_hover_text("Email me").clicked() {
        action = Some(PageAction::OpenUrl(inquiry_link(content)));
    }

    action
}

/// The `mailto:` link with the pre-filled project inquiry.
pub fn inquiry_link(content: &SiteContent) -> String {
    links::mailto(
        &content.owner.email,
        &content.contact.inquiry_subject,
        &content.contact.inquiry_body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::serialization::default_content;

    #[test]
    fn test_inquiry_link() {
        let content = default_content().unwrap();
        let link = inquiry_link(&content);

        assert!(link.starts_with("mailto:husainimuhd99@gmail.com?subject=Project%20Inquiry"));
        assert!(link.contains("&body=Hi%20Husaini%2C"));
    }
}
