/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a local business finder that provides accurate \
information about businesses with their exact locations and coordinates.";

/// Builds the user prompt asking for 3–5 businesses in the fixed listing
/// format the extractor understands.
///
/// `query` and `location` are embedded verbatim.
#[must_use]
pub fn build_prompt(query: &str, location: &str) -> String {
    format!(
        r#"
Find 3-5 local businesses in {location} related to: "{query}"

For each business, provide:
1. Business name
2. Type of business
3. Location (full address)
4. Rating (out of 5 stars)
5. Coordinates (latitude, longitude)

Format each listing as:
1. [Business Name]
Type: [business type]
Location: [full address]
Rating: [X.X/5]
Coordinates: [latitude], [longitude]

Ensure all coordinates are real and accurate for the specified location.
"#
    )
}
