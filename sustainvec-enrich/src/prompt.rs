pub const TABLE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that formats markdown tables and describes tables.";

/// User message asking the model to rebuild a table or chart as markdown and
/// describe it.
///
/// The model answers with a free-text description followed by a fenced
/// markdown table; the merge step stores that answer verbatim.
pub fn table_prompt(html_table: &str, table_text: &str, document_context: &str) -> String {
    format!(
        r#"You are a helpful assistant generating a markdown table and its description from a sustainability report. You receive three inputs:

1. An HTML rendering of a table or chart extracted from a PDF. It may be incomplete or have missing values.
2. The full content of the table or chart as unstructured text.
3. Context surrounding the table or chart in the original report.

Your task:
1. Produce a complete markdown table.
2. Write a detailed description of that table.

Start with the HTML rendering:
{html_table}

Then read the full text content:
{table_text}

Using both, first decide whether the source is a chart or a table:
- For a chart, interpret the chart data and convert it into a markdown table.
- For a table, build a complete markdown table that combines the HTML structure with the values from the text content.

Make sure that:
- Every cell holds appropriate content
- The result is a well-formed markdown table
- Inconsistencies between the HTML rendering and the text content are resolved logically

Next, read the context:
{document_context}

With this context and your markdown table, write a detailed description of the table that:
- Highlights key data points or trends
- Explains what the information means in the context of the report

Answer in exactly this format:

[Your detailed table description here]

```markdown
[Your generated markdown table here]
```
"#
    )
}
