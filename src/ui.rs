use crate::config::Variant;

pub fn render_index(variant: Variant) -> String {
    let theme = variant.theme();
    INDEX_HTML
        .replace("{{VARIANT}}", variant.as_str())
        .replace("{{TITLE}}", &escape_html(theme.title))
        .replace("{{TAGLINE}}", &escape_html(theme.tagline))
        .replace("{{PLACEHOLDER}}", &escape_html(theme.placeholder))
        .replace("{{SUBMIT}}", &escape_html(theme.submit_label))
        .replace("{{BG_FROM}}", theme.background.from)
        .replace("{{BG_TO}}", theme.background.to)
        .replace("{{ACCENT}}", theme.accent)
        .replace("{{INK}}", theme.ink)
        .replace("{{CARD}}", theme.card)
}

fn escape_html(value: &str) -> String {
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

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" data-variant="{{VARIANT}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: {{BG_FROM}};
      --bg-2: {{BG_TO}};
      --ink: {{INK}};
      --accent: {{ACCENT}};
      --card: {{CARD}};
      --mood-from: #cbd5e1;
      --mood-to: #475569;
      --shadow: 0 24px 60px rgba(15, 23, 42, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      opacity: 0.75;
    }

    textarea {
      width: 100%;
      min-height: 120px;
      resize: vertical;
      border-radius: 18px;
      border: 1px solid rgba(100, 116, 139, 0.3);
      padding: 16px;
      font: inherit;
      background: rgba(255, 255, 255, 0.92);
      color: #1f2937;
    }

    .actions {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease, opacity 150ms ease;
      display: inline-flex;
      align-items: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    button.ghost {
      background: transparent;
      color: var(--ink);
      border: 1px solid currentColor;
    }

    .spinner {
      width: 16px;
      height: 16px;
      border-radius: 50%;
      border: 2px solid rgba(255, 255, 255, 0.4);
      border-top-color: white;
      animation: spin 800ms linear infinite;
    }

    .result {
      border-radius: 22px;
      padding: 24px;
      background: linear-gradient(135deg, var(--mood-from), var(--mood-to));
      color: #111827;
      display: grid;
      gap: 12px;
      animation: rise 400ms ease;
    }

    .result .emoji {
      font-size: 3.5rem;
    }

    .result .mood {
      font-size: 1.6rem;
      font-weight: 600;
      text-transform: capitalize;
    }

    .bar {
      height: 12px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.45);
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      width: 0;
      background: rgba(17, 24, 39, 0.75);
      transition: width 900ms ease;
    }

    .alert {
      border-radius: 16px;
      padding: 14px 18px;
      background: #fee2e2;
      color: #991b1b;
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    [hidden] {
      display: none !important;
    }

    @keyframes rise {
      from { opacity: 0; transform: translateY(12px); }
      to { opacity: 1; transform: translateY(0); }
    }

    @keyframes spin {
      to { transform: rotate(360deg); }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{TITLE}}</h1>
      <p class="subtitle">{{TAGLINE}}</p>
    </header>

    <form id="mood-form">
      <textarea id="text" placeholder="{{PLACEHOLDER}}" autofocus></textarea>
      <div class="actions">
        <button type="submit" id="submit" disabled>
          <span class="spinner" id="spinner" hidden></span>
          <span id="submit-label">{{SUBMIT}}</span>
        </button>
        <button type="button" class="ghost" id="reset">Reset</button>
      </div>
    </form>

    <div class="alert" id="error" role="alert" hidden>
      <span id="error-text"></span>
      <button type="button" class="ghost" id="retry">Try again</button>
    </div>

    <section class="result" id="result" hidden>
      <div class="emoji" id="emoji"></div>
      <div class="mood" id="mood"></div>
      <div class="bar"><div class="bar-fill" id="bar"></div></div>
      <div id="percent"></div>
    </section>
  </main>

  <script>
    const form = document.getElementById('mood-form');
    const textEl = document.getElementById('text');
    const submitEl = document.getElementById('submit');
    const spinnerEl = document.getElementById('spinner');
    const errorEl = document.getElementById('error');
    const errorTextEl = document.getElementById('error-text');
    const resultEl = document.getElementById('result');
    const emojiEl = document.getElementById('emoji');
    const moodEl = document.getElementById('mood');
    const barEl = document.getElementById('bar');
    const percentEl = document.getElementById('percent');

    const state = { text: '', result: null, loading: false, error: '' };
    let shownResult = null;

    const canSubmit = () => !state.loading && state.text.trim().length > 0;

    const render = () => {
      submitEl.disabled = !canSubmit();
      spinnerEl.hidden = !state.loading;

      errorEl.hidden = !state.error;
      errorTextEl.textContent = state.error;

      if (state.result === shownResult) {
        return;
      }
      shownResult = state.result;

      if (!state.result) {
        resultEl.hidden = true;
        barEl.style.width = '0';
        return;
      }

      const result = state.result;
      resultEl.hidden = false;
      resultEl.style.setProperty('--mood-from', result.gradient[0]);
      resultEl.style.setProperty('--mood-to', result.gradient[1]);
      emojiEl.textContent = result.emoji;
      moodEl.textContent = result.mood;
      percentEl.textContent = `Confidence ${result.percent}`;
      barEl.style.width = '0';
      requestAnimationFrame(() => {
        requestAnimationFrame(() => {
          barEl.style.width = `${result.score * 100}%`;
        });
      });
    };

    const analyze = async () => {
      if (!canSubmit()) {
        return;
      }
      state.loading = true;
      state.result = null;
      state.error = '';
      render();

      try {
        const res = await fetch('/api/analyze', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ text: state.text })
        });
        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || `Request failed (${res.status})`);
        }
        state.result = await res.json();
      } catch (err) {
        state.error = err.message || 'Something went wrong';
      } finally {
        state.loading = false;
        render();
      }
    };

    const reset = () => {
      state.text = '';
      state.result = null;
      state.error = '';
      textEl.value = '';
      render();
      textEl.focus();
    };

    textEl.addEventListener('input', () => {
      state.text = textEl.value;
      render();
    });

    textEl.addEventListener('keydown', (event) => {
      if (event.key === 'Enter' && !event.shiftKey) {
        event.preventDefault();
        analyze();
      }
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      analyze();
    });

    document.getElementById('reset').addEventListener('click', reset);
    document.getElementById('retry').addEventListener('click', reset);

    render();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_variant_copy() {
        let html = render_index(Variant::Premium);
        assert!(html.contains("<title>Moodify Premium</title>"));
        assert!(html.contains("data-variant=\"premium\""));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn enter_without_shift_submits_through_the_guard() {
        let html = render_index(Variant::Live);
        assert!(html.contains(
            "if (event.key === 'Enter' && !event.shiftKey) {\n        event.preventDefault();\n        analyze();"
        ));
        assert!(html.contains(
            "const canSubmit = () => !state.loading && state.text.trim().length > 0;"
        ));
        assert!(html.contains("const analyze = async () => {\n      if (!canSubmit()) {\n        return;"));
        assert!(html.contains("submitEl.disabled = !canSubmit();"));
    }

    #[test]
    fn reset_clears_state_and_refocuses() {
        let html = render_index(Variant::Live);
        let start = html.find("const reset = () => {").expect("reset handler");
        let end = start + html[start..].find("};").expect("reset body end");
        let body = &html[start..end];
        for line in [
            "state.text = '';",
            "state.result = null;",
            "state.error = '';",
            "textEl.value = '';",
            "render();",
            "textEl.focus();",
        ] {
            assert!(body.contains(line), "reset is missing `{line}`");
        }
        assert!(html.contains("getElementById('reset').addEventListener('click', reset)"));
        assert!(html.contains("getElementById('retry').addEventListener('click', reset)"));
    }

    #[test]
    fn bar_animation_only_restarts_for_a_new_result() {
        let html = render_index(Variant::Live);
        let guard = html.find("if (state.result === shownResult) {").expect("result guard");
        let reset_bar = html.find("barEl.style.width = `${result.score * 100}%`").expect("bar fill");
        assert!(guard < reset_bar);
    }

    #[test]
    fn copy_is_escaped_for_attributes() {
        let html = render_index(Variant::Demo);
        assert!(html.contains("placeholder=\"Try &quot;I feel great today&quot;...\""));
    }
}
