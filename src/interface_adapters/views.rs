// Server-rendered landing page. The inline script performs the same hand-off
// as `use_cases::handoff`, against the widget script loaded in the head.

use std::fmt::Write;

use crate::domain::content::PageContent;
use crate::domain::registration::EmployeeCount;
use crate::interface_adapters::state::PageSettings;
use crate::use_cases::page_view::{REGISTRATION_FAILED_ALERT, SUBMIT_LABEL, SUBMITTING_LABEL};

const STYLE: &str = r##"
body { margin: 0; font-family: system-ui, sans-serif; background: linear-gradient(135deg, #4f46e5, #9333ea, #3730a3); min-height: 100vh; color: #fff; }
main { max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem; }
header { text-align: center; margin-bottom: 3rem; }
#sequel_root { background: #fff; border-radius: 1rem; overflow: hidden; margin-bottom: 2.5rem; }
.panel { background: rgba(255, 255, 255, 0.15); border: 1px solid rgba(255, 255, 255, 0.3); border-radius: 1rem; padding: 2rem; margin-bottom: 2.5rem; }
.form-panel { background: #fff; color: #1f2937; border-radius: 1rem; padding: 2rem; }
.form-panel input, .form-panel select { display: block; width: 100%; box-sizing: border-box; padding: 0.75rem 1rem; margin-bottom: 1rem; border: 2px solid #d1d5db; border-radius: 0.5rem; }
.form-panel button, #reset-registration { width: 100%; padding: 1rem; border: 0; border-radius: 0.5rem; font-weight: 700; color: #fff; background: #4f46e5; cursor: pointer; }
.form-panel button:disabled { opacity: 0.6; cursor: not-allowed; }
#reset-registration { width: auto; background: #22c55e; }
.content-grid { display: grid; gap: 2.5rem; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
.features { list-style: none; padding: 0; font-size: 1.125rem; }
.features li::before { content: "\2713"; color: #4ade80; margin-right: 0.75rem; }
"##;

const KEY_FEATURES: [&str; 5] = [
    "Custom registration form",
    "Automatic event registration",
    "Returning user detection",
    "Seamless user experience",
    "Cookie-based persistence",
];

const SCRIPT: &str = r##"
(function () {
  var root = document.getElementById('landing');
  var eventId = root.dataset.eventId;
  var companyId = root.dataset.companyId;
  var formPanel = document.getElementById('registration-panel');
  var confirmation = document.getElementById('confirmation-panel');
  var form = document.getElementById('registration-form');
  var submit = document.getElementById('register-submit');

  function showForm() { formPanel.hidden = false; confirmation.hidden = true; }
  function showConfirmation() { formPanel.hidden = true; confirmation.hidden = false; }

  if (window.Sequel) {
    if (companyId) {
      window.Sequel.init(companyId);
      window.Sequel.initializeTracking();
    }
    window.Sequel.checkAndRenderIfRegistered({
      sequelEventId: eventId,
      onAlreadyRegistered: function () { showConfirmation(); },
      onNotRegistered: function () { showForm(); }
    });
  }

  form.addEventListener('submit', async function (e) {
    e.preventDefault();
    submit.disabled = true;
    submit.textContent = root.dataset.submittingLabel;
    var data = new FormData(form);
    try {
      var res = await fetch('/registration/submit', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          fullName: data.get('fullName'),
          email: data.get('email'),
          companyName: data.get('companyName'),
          numberOfEmployees: data.get('numberOfEmployees'),
          phoneNumber: data.get('phoneNumber'),
          eventId: eventId
        })
      });
      if (!res.ok) { throw new Error('registration endpoint returned ' + res.status); }
      var result = await res.json();
      window.Sequel.setSequelJoinCodeCookie(eventId, result.joinCode);
      window.Sequel.renderEvent({ eventId: eventId, joinCode: result.joinCode });
      showConfirmation();
    } catch (err) {
      console.error('Registration error:', err);
      alert(root.dataset.failedAlert);
    } finally {
      submit.disabled = false;
      submit.textContent = root.dataset.submitLabel;
    }
  });

  document.getElementById('reset-registration').addEventListener('click', function () {
    window.Sequel.clearSequelJoinCodeCookie(eventId);
    window.location.reload();
  });
})();
"##;

pub fn render_landing_page(content: &PageContent, settings: &PageSettings) -> String {
    let mut features = String::new();
    for feature in KEY_FEATURES {
        let _ = write!(features, "<li>{feature}</li>");
    }

    let mut options = String::new();
    for bucket in EmployeeCount::ALL {
        let _ = write!(
            options,
            r#"<option value="{0}">{0}</option>"#,
            escape_html(bucket.as_str())
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="viewport" content="width=device-width, initial-scale=1">
<script src="{script_url}"></script>
<style>{style}</style>
</head>
<body>
<main id="landing" data-event-id="{event_id}" data-company-id="{company_id}" data-submit-label="{submit_label}" data-submitting-label="{submitting_label}" data-failed-alert="{failed_alert}">
<header>
<h1>{title}</h1>
<p>{description}</p>
</header>
<div id="sequel_root"></div>
<section id="confirmation-panel" class="panel" hidden>
<h3>You are in!</h3>
<p>We found a valid join code for this event and the event view above was rendered for you, so the registration form is hidden.</p>
<button type="button" id="reset-registration">Reset Demo (Clear Cookies)</button>
</section>
<div class="content-grid">
<section id="about" class="panel">
<h2>About This Example</h2>
<p>This integration combines a custom registration form with the Sequel embed toolkit. Visitors register through the form and are handed straight into the Sequel event experience.</p>
<h2>Key Features</h2>
<ul class="features">{features}</ul>
</section>
<section id="registration-panel" class="form-panel" hidden>
<h3>Register for Event</h3>
<form id="registration-form">
<input type="text" name="fullName" placeholder="Full Name" required>
<input type="email" name="email" placeholder="Email Address" required>
<input type="text" name="companyName" placeholder="Company Name" required>
<select name="numberOfEmployees" required><option value="">Number of Employees</option>{options}</select>
<input type="tel" name="phoneNumber" placeholder="Phone Number" required>
<button type="submit" id="register-submit">{submit_label}</button>
</form>
<p>By registering, you agree to our terms of service and privacy policy.</p>
</section>
</div>
</main>
<script>{script}</script>
</body>
</html>
"#,
        title = escape_html(&content.title),
        description = escape_html(&content.description),
        script_url = escape_html(&settings.widget_script_url),
        style = STYLE,
        event_id = escape_html(&content.event_id),
        company_id = escape_html(settings.company_id.as_deref().unwrap_or_default()),
        submit_label = SUBMIT_LABEL,
        submitting_label = SUBMITTING_LABEL,
        failed_alert = REGISTRATION_FAILED_ALERT,
        features = features,
        options = options,
        script = SCRIPT,
    )
}

// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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
