use time::{macros::format_description, OffsetDateTime};

use crate::users::model::User;

/// User as handed to the template, every field filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderUser {
    pub id: u64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for RenderUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            surname: u.surname.unwrap_or_default(),
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub users: Vec<RenderUser>,
    pub total_count: u64,
    pub error: Option<String>,
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn avatar(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

fn created_date(ts: i64) -> String {
    if ts == 0 {
        return "Unknown".into();
    }
    OffsetDateTime::from_unix_timestamp(ts)
        .ok()
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| "Unknown".into())
}

fn user_card(out: &mut String, u: &RenderUser) {
    let email = if u.email.is_empty() { "No email" } else { u.email.as_str() };
    out.push_str(&format!(
        r#"<div class="user-card" data-user-id="{id}"><div class="user-header"><div class="avatar">{avatar}</div><div class="user-info"><h3>{name}</h3><p class="user-id">ID: {id}</p></div></div><div class="user-details"><p class="detail">Email: <span>{email}</span></p>"#,
        id = u.id,
        avatar = escape(&avatar(&u.name)),
        name = escape(&u.name),
        email = escape(email),
    ));
    if !u.surname.is_empty() {
        out.push_str(&format!(
            r#"<p class="detail">Surname: <span>{}</span></p>"#,
            escape(&u.surname)
        ));
    }
    out.push_str(&format!(
        r#"<p class="detail timestamp">Created: {}</p></div></div>"#,
        created_date(u.created_at)
    ));
}

/// Renders the full HTML document for the user overview.
pub fn render_document(model: &PageModel) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(concat!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\" />",
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />",
        "<title>User Directory</title><link rel=\"stylesheet\" href=\"/css/styles.css\" />",
        "</head><body><div id=\"root\"><div class=\"container\">",
        "<header class=\"header\"><h1 class=\"title\">User Directory</h1>",
        "<p class=\"subtitle\">Server-rendered view over the user service</p></header>",
    ));

    if let Some(error) = &model.error {
        out.push_str(&format!(
            r#"<div class="error-banner"><p>{}</p></div>"#,
            escape(error)
        ));
    }

    out.push_str(&format!(
        r#"<section class="content"><div class="users-header"><h2>Users</h2><div class="badge" data-total-count="{n}">Total: {n}</div></div>"#,
        n = model.total_count
    ));

    if model.users.is_empty() {
        if model.error.is_none() {
            out.push_str(r#"<div class="empty-state"><p>No users found. Start the user backend to see users!</p></div>"#);
        }
    } else {
        out.push_str(r#"<div class="users-grid">"#);
        for u in &model.users {
            user_card(&mut out, u);
        }
        out.push_str("</div>");
    }

    out.push_str(concat!(
        "</section><footer class=\"footer\"><p>Data fetched from the user backend</p></footer>",
        "</div></div></body></html>",
    ));
    out
}
