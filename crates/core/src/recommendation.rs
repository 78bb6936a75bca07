//! Recommendation
//!
//! Builds the prompt sent to a language model and parses its reply. The reply
//! carries no field labels: the ids are matched to categories by position.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{catalog::Category, configurator::ConfiguratorComponents, specs::SpecsIds};

/// Number of ids a reply must contain.
pub const EXPECTED_IDS: usize = Category::ALL.len();

/// A reply that cannot be turned into [`SpecsIds`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedResponse {
    /// The model returned nothing.
    #[error("recommendation reply was empty")]
    Empty,

    /// The reply did not contain exactly one id per category.
    #[error("expected 8 component ids, got {0}")]
    TokenCount(usize),
}

/// What the client wants recommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Kind of computer, e.g. `"gaming PC"` or `"video editing workstation"`
    pub computer_type: String,

    /// Budget, free text, e.g. `"1500 USD"`
    pub budget: String,
}

/// Renders the catalog listing the model chooses from.
pub fn render_listing(components: &ConfiguratorComponents) -> String {
    components
        .entries()
        .iter()
        .map(|(category, names)| {
            let lines: String = names
                .iter()
                .map(|(id, name)| format!("  {id} - {name}\n"))
                .collect();

            format!("{}:\n{lines}", category.label())
        })
        .collect()
}

/// Builds the prompt asking for one component id per category.
pub fn build_prompt(request: &RecommendationRequest, components: &ConfiguratorComponents) -> String {
    let order = Category::ALL
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Assemble a {computer_type} with a budget of {budget}.\n\
         Pick exactly one component from each of the following {EXPECTED_IDS} categories. \
         Each line is \"<id> - <name> ($<price>)\".\n\n\
         {listing}\n\
         Reply with exactly {EXPECTED_IDS} component ids separated by single spaces, \
         one per category, in this order: {order}.\n\
         Do not use commas. Do not add any other text.",
        computer_type = request.computer_type,
        budget = request.budget,
        listing = render_listing(components),
    )
}

/// Parses a reply into positional ids.
///
/// Commas are stripped by turning them into whitespace, then the reply is
/// split on whitespace, so `"a,b"`, `"a, b"` and `"a b"` all hold two ids.
/// Whether the ids exist is left to the resolver.
///
/// # Errors
///
/// - [`MalformedResponse::Empty`]: the reply is missing or blank.
/// - [`MalformedResponse::TokenCount`]: the reply does not hold exactly
///   [`EXPECTED_IDS`] ids.
pub fn parse_reply(reply: Option<&str>) -> Result<SpecsIds, MalformedResponse> {
    let reply = reply
        .map(|reply| reply.replace(',', " "))
        .filter(|reply| !reply.trim().is_empty())
        .ok_or(MalformedResponse::Empty)?;

    let tokens: Vec<String> = reply.split_whitespace().map(ToString::to_string).collect();
    let count = tokens.len();

    let ids: [String; EXPECTED_IDS] = tokens
        .try_into()
        .map_err(|_rejected: Vec<String>| MalformedResponse::TokenCount(count))?;

    Ok(SpecsIds::from_positional(ids))
}
