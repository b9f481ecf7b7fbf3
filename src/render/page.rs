//! HTML page wrapper with a live hover tooltip.

use super::svg::escape_text;

const STYLE: &str = r#"
      body { margin: 0; font-family: sans-serif; background: #f4f4f4; }
      main { display: flex; justify-content: center; padding: 2rem; }
      svg { background: white; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.2); }
      .bar:hover, .dot:hover { fill: #d33; }
      #tooltip {
        position: absolute;
        pointer-events: none;
        opacity: 0;
        padding: 0.5rem;
        white-space: pre-line;
        background: rgba(255, 255, 204, 0.95);
        border: 1px solid #888;
        border-radius: 4px;
        font-size: 12px;
      }
"#;

const SCRIPT: &str = r#"
      (function () {
        var tooltip = document.getElementById("tooltip");
        document.querySelectorAll("[data-tooltip]").forEach(function (mark) {
          mark.addEventListener("mouseover", function (event) {
            tooltip.textContent = mark.getAttribute("data-tooltip");
            if (mark.hasAttribute("data-date")) {
              tooltip.setAttribute("data-date", mark.getAttribute("data-date"));
            }
            if (mark.hasAttribute("data-xvalue")) {
              tooltip.setAttribute("data-year", mark.getAttribute("data-xvalue"));
            }
            tooltip.style.left = event.pageX + 12 + "px";
            tooltip.style.top = event.pageY - 28 + "px";
            tooltip.style.opacity = 1;
          });
          mark.addEventListener("mouseout", function () {
            tooltip.style.opacity = 0;
          });
        });
      })();
"#;

/// Inline `svg` into a standalone page with a `div#tooltip` driven by the marks'
/// `data-tooltip` attributes.
pub fn wrap_html(title: &str, svg: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("  <head>\n");
    out.push_str("    <meta charset=\"utf-8\">\n");
    out.push_str(&format!("    <title>{}</title>\n", escape_text(title)));
    out.push_str("    <style>");
    out.push_str(STYLE);
    out.push_str("    </style>\n");
    out.push_str("  </head>\n");
    out.push_str("  <body>\n");
    out.push_str("    <main>\n");
    out.push_str(svg);
    if !svg.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("    </main>\n");
    out.push_str("    <div id=\"tooltip\" style=\"opacity: 0\"></div>\n");
    out.push_str("    <script>");
    out.push_str(SCRIPT);
    out.push_str("    </script>\n");
    out.push_str("  </body>\n");
    out.push_str("</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inlines_svg_and_hidden_tooltip() {
        let html = wrap_html("GDP & more", "<svg id=\"dat-viz\"></svg>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>GDP &amp; more</title>"));
        assert!(html.contains("<svg id=\"dat-viz\"></svg>\n    </main>"));
        assert!(html.contains("<div id=\"tooltip\" style=\"opacity: 0\"></div>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn script_copies_date_and_year() {
        let html = wrap_html("t", "<svg></svg>\n");
        assert!(html.contains("\"data-date\""));
        assert!(html.contains("\"data-year\""));
        assert!(html.contains("mouseout"));
        assert!(!html.contains("</svg>\n\n"));
    }
}
