use crate::modules::notification::model::NotificationPayload;
use crate::utils::escape_html;

fn text(value: &Option<String>) -> String {
    escape_html(value.as_deref().unwrap_or_default())
}

pub fn render_subject(payload: &NotificationPayload) -> String {
    format!("New Gift Request from {}", payload.parent_name.as_deref().unwrap_or_default())
}

pub fn render_html(payload: &NotificationPayload) -> String {
    let child_age = payload.child_age.map(|age| age.to_string()).unwrap_or_default();
    let message = text(&payload.message).replace("\r\n", "\n").replace('\n', "<br />");

    format!(
        "<h2>New Message from {name}</h2>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Child's Age:</strong> {child_age}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>\n",
        name = text(&payload.parent_name),
        email = text(&payload.parent_email),
    )
}
