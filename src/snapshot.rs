//! HTML rendering of the activity list, as printed by the `snapshot` command.
//!
//! Every server-provided string goes through [`escape`] before it touches the
//! markup, both in text content and inside attribute values.

use std::borrow::Cow;
use std::fmt::Write;

use crate::common::{Activity, ActivityCatalog};
use crate::ui::state::ListView;

pub const LOADING_HTML: &str = "<p>Loading activities...</p>";
pub const UNAVAILABLE_HTML: &str = "<p>Failed to load activities. Please try again later.</p>";

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

pub fn render_view(view: &ListView) -> String {
    match view {
        ListView::Loading => LOADING_HTML.to_string(),
        ListView::Loaded(catalog) => render_catalog(catalog),
        ListView::Unavailable => UNAVAILABLE_HTML.to_string(),
    }
}

pub fn render_catalog(catalog: &ActivityCatalog) -> String {
    let mut html = String::new();
    for activity in catalog.activities() {
        render_card(&mut html, activity);
    }
    html
}

fn render_card(html: &mut String, activity: &Activity) {
    let name = escape(&activity.name);

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<div class=\"activity-card\">\
         <h4 class=\"activity-title\">{name}</h4>\
         <p class=\"activity-desc\">{}</p>\
         <p class=\"activity-schedule\"><strong>Schedule:</strong> {}</p>\
         <p class=\"activity-availability\"><strong>Availability:</strong> \
         <span class=\"spots-left\">{} spots left</span></p>\
         <div class=\"participants-section\">\
         <h5 class=\"participants-heading\">Participants</h5>",
        escape(&activity.description),
        escape(&activity.schedule),
        activity.spots_left(),
    );

    if activity.participants.is_empty() {
        html.push_str("<p class=\"no-participants\">No participants yet</p>");
    } else {
        html.push_str("<ul class=\"participants-list\">");
        for participant in &activity.participants {
            let email = escape(participant);
            let _ = write!(
                html,
                "<li class=\"participant-item\"><span>{email}</span>\
                 <button class=\"delete-participant\" data-activity=\"{name}\" \
                 data-email=\"{email}\" title=\"Remove participant\">×</button></li>"
            );
        }
        html.push_str("</ul>");
    }

    html.push_str("</div></div>");
}

/// `<option>` list for the activity selector, led by the empty placeholder.
pub fn render_options(catalog: &ActivityCatalog) -> String {
    let mut html = String::from("<option value=\"\">Select an activity</option>");
    for name in catalog.names() {
        let name = escape(name);
        let _ = write!(html, "<option value=\"{name}\">{name}</option>");
    }
    html
}
