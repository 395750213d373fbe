//! Prompt templates sent to the text generator.

/// Prompt for one entry of a batch request.
pub fn batch_prompt(title: &str, details: Option<&str>) -> String {
    let details_line = match details {
        Some(details) if !details.is_empty() => format!("Additional details: {}\n", details),
        _ => String::new(),
    };

    format!(
        "Write a comprehensive technical blog article about: \"{title}\"\n\
         {details_line}\n\
         Requirements:\n\
         - Write 800-1200 words\n\
         - Include practical examples and code snippets where relevant\n\
         - Use clear headings and structure\n\
         - Make it engaging for developers\n\
         - Include key takeaways at the end\n\
         \n\
         Format the article in markdown."
    )
}

/// Prompt for a free-form single article request.
pub fn single_prompt(prompt: &str) -> String {
    format!(
        "{prompt}\n\
         \n\
         Write this as a technical blog article with 800-1200 words.\n\
         Include code examples if relevant.\n\
         Format in markdown with proper headings."
    )
}
