//! HTML presentation: upload form, results page, error page.
//!
//! Pages are plain server-rendered HTML with inline CSS; every piece of
//! user-supplied text goes through [`escape`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sentiment_engine::types::{DownloadOutput, InsightOutput};
use sentiment_engine::{Distribution, Report};

pub const PAGE_TITLE: &str = "Customer Review Sentiment Analyzer";
const UPLOAD_PROMPT: &str = "Upload a CSV or Excel file with customer reviews";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#262730}\
h1{font-size:1.8rem}h2{font-size:1.25rem;margin-top:2rem}\
table{border-collapse:collapse;width:100%}td,th{border:1px solid #ddd;padding:.35rem .5rem;text-align:left}\
.chart{display:flex;align-items:flex-end;gap:1.5rem;height:14rem;border-bottom:1px solid #999;padding:0 1rem}\
.bar{flex:1;display:flex;flex-direction:column;justify-content:flex-end;align-items:center;height:100%}\
.bar span.fill{display:block;width:100%;background:#1c83e1}\
.box{padding:.75rem 1rem;border-radius:.4rem}\
.warning{background:#fffce7;border:1px solid #e8d36a}.success{background:#ecf9ef;border:1px solid #8bd29a}\
.info{background:#e8f1fb;border:1px solid #8cb8e8}.error{background:#fdecec;border:1px solid #e49a9a}\
.button{display:inline-block;padding:.5rem 1rem;border:1px solid #999;border-radius:.4rem;text-decoration:none;color:inherit}";

/// Escape text for HTML element and attribute content.
pub fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

fn page(body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>Sentiment Analyzer</title><style>{style}</style></head>\
<body><h1>{title}</h1>{upload}{body}</body></html>\n",
    style = STYLE,
    title = PAGE_TITLE,
    upload = upload_form(),
    body = body
  )
}

fn upload_form() -> String {
  format!(
    "<form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\
<label for=\"file\">{prompt}</label><br>\
<input id=\"file\" type=\"file\" name=\"file\" accept=\".csv,.xlsx\" required> \
<button type=\"submit\">Analyze</button></form>",
    prompt = UPLOAD_PROMPT
  )
}

pub fn upload_page() -> String {
  page("")
}

/// Error box under the upload form; processing stopped before any results.
pub fn error_page(message: &str) -> String {
  page(&format!(
    "<div class=\"box error\" role=\"alert\">{}</div>",
    escape(message)
  ))
}

/// Full results: preview, breakdown chart, insight, download link.
pub fn result_page(report: &Report, download: &[u8]) -> String {
  let mut body = String::new();
  body.push_str("<h2>Preview of Uploaded Data</h2>");
  body.push_str(&preview_table(&report.review_column, &report.preview));
  body.push_str("<h2>Sentiment Breakdown</h2>");
  body.push_str(&bar_chart(&report.distribution));
  body.push_str("<h2>Business Insight</h2>");
  body.push_str(&insight_box(&report.insight));
  body.push_str("<h2>Download Processed File</h2>");
  body.push_str(&download_link(&report.download, download));
  page(&body)
}

fn preview_table(column: &str, rows: &[String]) -> String {
  let mut html = format!(
    "<table><thead><tr><th></th><th>{}</th></tr></thead><tbody>",
    escape(column)
  );
  for (i, value) in rows.iter().enumerate() {
    html.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", i, escape(value)));
  }
  html.push_str("</tbody></table>");
  html
}

fn bar_chart(distribution: &Distribution) -> String {
  if distribution.is_empty() {
    return "<p>No reviews to chart.</p>".to_string();
  }
  let mut html = String::from("<div class=\"chart\" role=\"img\" aria-label=\"Sentiment breakdown\">");
  for (label, pct) in distribution.ranked() {
    html.push_str(&format!(
      "<div class=\"bar\"><small>{pct:.2}%</small>\
<span class=\"fill\" style=\"height:{pct:.2}%\"></span><small>{label}</small></div>",
      pct = pct,
      label = label
    ));
  }
  html.push_str("</div>");
  html
}

fn insight_box(insight: &InsightOutput) -> String {
  let heading = match insight.kind {
    sentiment_engine::Insight::Mixed => String::new(),
    _ => format!("<strong>{}</strong><br>", escape(insight.title)),
  };
  format!(
    "<div class=\"box {level}\">{heading}{message}</div>",
    level = insight.level,
    heading = heading,
    message = escape(insight.message)
  )
}

fn download_link(download: &DownloadOutput, bytes: &[u8]) -> String {
  format!(
    "<a class=\"button\" download=\"{name}\" href=\"data:{mime};base64,{data}\">{label}</a>",
    name = download.file_name,
    mime = download.mime_type,
    data = STANDARD.encode(bytes),
    label = download.label
  )
}
