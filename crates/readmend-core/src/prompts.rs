/// Prompt templates for the README consultant
pub struct ConsultantPrompts;

impl ConsultantPrompts {
    /// Build the enhancement prompt.
    ///
    /// The fence labels here are a bit-exact contract with
    /// `readmend-extract`: the improved README arrives in a ```markdown
    /// block and the changelog in a ```json block whose object holds a
    /// `changes_made` array.
    pub fn build_enhance_prompt(readme: &str, tree: &str, remote_summary: &str) -> String {
        format!(
            r#"You are an expert in open source documentation.

Please improve the following README.md file with better formatting, clearer
sectioning, and enhanced writing quality with a professional tone.

Requirements:
- Do not remove any existing GIFs, demo sections, or badge links.
- Return the **entire updated README** in valid Markdown.
- Be verbose and explain in reasonable detail.

Format your response as:

```markdown
# README

<Improved README content here>
```

At the end, include a JSON block inside a triple backtick block labeled json:

```json
{{
  "changes_made": [
    "Improved formatting for section headers",
    "Rewrote project overview with more clarity"
  ]
}}
```

This allows the README and the list of improvements to be extracted
separately. You CANNOT forget the json block.

The repo folder tree:
----
{tree}
----

The README:
_____
{readme}
_____

Repository remote:
____
{remote}
____
Do not print the remote information in your response."#,
            tree = truncate_output(tree, 20000),
            readme = readme,
            remote = remote_summary,
        )
    }

    /// Build the review prompt. The reply is a free-form report; no
    /// structured extraction is applied to it.
    pub fn build_review_prompt(readme: &str, tree: &str, remote_summary: &str) -> String {
        format!(
            r#"You are an expert in open source documentation. You are going to review my
README.md file. Give me the report in a text block. I intend to show this
report to my client.

The repo folder tree:
----
{tree}
----

The README:
_____
{readme}
_____

Repository remote:
____
{remote}
____

Please do the following:
- mention what I am doing well and what I could improve on.
- if any sections are missing like 'usage', 'requirements', etc.
- check for professional tone.
- mention best open source practices."#,
            tree = truncate_output(tree, 20000),
            readme = readme,
            remote = remote_summary,
        )
    }
}

fn truncate_output(output: &str, max_len: usize) -> &str {
    if output.len() <= max_len {
        return output;
    }

    // Tree listings are full of multibyte box-drawing characters, so the
    // cut must land on a char boundary before slicing.
    let mut cut = max_len;
    while !output.is_char_boundary(cut) {
        cut -= 1;
    }

    // Try to truncate at a line boundary
    match output[..cut].rfind('\n') {
        Some(pos) => &output[..pos],
        None => &output[..cut],
    }
}
