/// Per-request view of the name form. Nothing here outlives the response.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormView<'a> {
    pub(crate) name1: &'a str,
    pub(crate) name2: &'a str,
    pub(crate) result: &'a str,
}

impl<'a> FormView<'a> {
    pub(crate) fn blank(placeholder: &'a str) -> Self {
        Self {
            name1: "",
            name2: "",
            result: placeholder,
        }
    }

    pub(crate) fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>FLAMES</title>
</head>
<body>
    <h1>FLAMES</h1>
    <form id="flameForm" method="post" action="/">
        <label for="name1">First name</label>
        <input type="text" id="name1" name="name1" value="{name1}">
        <label for="name2">Second name</label>
        <input type="text" id="name2" name="name2" value="{name2}">
        <button type="submit">Calculate</button>
        <button type="submit" id="resetBtn" formaction="/reset" formnovalidate>Reset</button>
    </form>
    <p id="resultText">{result}</p>
</body>
</html>
"#,
            name1 = escape_html(self.name1),
            name2 = escape_html(self.name2),
            result = escape_html(self.result),
        )
    }
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
