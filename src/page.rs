//! JavaScript injected into the Fastmail page.
//!
//! Two scripts are built here: a one-shot compose trigger evaluated on
//! demand, and an unread-count poller installed as an initialization script.
//! Both are plain IIFEs with no page-visible globals. Selector lists cover
//! several generations of Fastmail's markup.

/// Candidate selectors for the compose button, tried in order.
pub const COMPOSE_SELECTORS: [&str; 4] = [
    "[data-testid=\"compose-button\"]",
    ".v-Button--compose",
    "button[title*=\"Compose\"]",
    ".s-compose-button",
];

/// Folder unread badges; their numeric contents are summed.
pub const UNREAD_BADGE_SELECTORS: [&str; 3] = [
    "[data-testid=\"sidebar-folder-unread-count\"]",
    ".s-unread-count",
    ".unread-count",
];

/// Inbox-specific badge. When present it overrides the summed total.
pub const INBOX_BADGE_SELECTOR: &str =
    ".v-MailboxList-item.is-inbox .v-MailboxList-item-unreadCount";

/// Delay after DOMContentLoaded before the first sample, giving the mail UI
/// time to render its sidebar.
pub const POLL_SETTLE_MS: u32 = 5_000;

/// Interval between samples once polling has started.
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// Embeds a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    // serde_json string serialization is valid JS source
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Script that clicks the first matching compose button. The outcome is
/// reported back to the host so a selector miss is observable in the logs,
/// but the user never sees an error either way.
pub fn compose_script() -> String {
    let selectors = js_string(&COMPOSE_SELECTORS.join(", "));
    format!(
        r#"(function () {{
  var matched = null;
  var button = null;
  {selectors}.split(', ').some(function (selector) {{
    var candidate = document.querySelector(selector);
    if (candidate) {{
      matched = selector;
      button = candidate;
      return true;
    }}
    return false;
  }});
  if (button) {{
    button.click();
  }}
  window.__TAURI__.core
    .invoke('report_compose_result', {{ matchedSelector: matched }})
    .catch(function () {{}});
}})();"#
    )
}

/// Script that periodically samples unread badges and reports them to the
/// host over the invoke bridge. Sampling failures are swallowed so a markup
/// change degrades to "no notifications" rather than breaking the page.
pub fn poller_script() -> String {
    let badge_selectors = js_string(&UNREAD_BADGE_SELECTORS.join(", "));
    let inbox_selector = js_string(INBOX_BADGE_SELECTOR);
    let settle = POLL_SETTLE_MS;
    let interval = POLL_INTERVAL_MS;
    format!(
        r#"(function () {{
  function sampleUnread() {{
    try {{
      var total = 0;
      document.querySelectorAll({badge_selectors}).forEach(function (badge) {{
        var count = parseInt(badge.textContent, 10);
        if (!isNaN(count)) {{
          total += count;
        }}
      }});
      var inboxCount = null;
      var inboxBadge = document.querySelector({inbox_selector});
      if (inboxBadge) {{
        var parsed = parseInt(inboxBadge.textContent, 10);
        if (!isNaN(parsed)) {{
          inboxCount = parsed;
        }}
      }}
      window.__TAURI__.core
        .invoke('report_unread_count', {{ badgeTotal: total, inboxBadge: inboxCount }})
        .catch(function (err) {{
          console.warn('unread report failed', err);
        }});
    }} catch (err) {{
      console.warn('unread sampling failed', err);
    }}
  }}

  function startPolling() {{
    setTimeout(function () {{
      sampleUnread();
      setInterval(sampleUnread, {interval});
    }}, {settle});
  }}

  if (document.readyState === 'loading') {{
    document.addEventListener('DOMContentLoaded', startPolling);
  }} else {{
    startPolling();
  }}
}})();"#
    )
}
