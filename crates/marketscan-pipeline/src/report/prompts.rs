//! Follow-up planning prompts for validated markets.

use marketscan_core::types::{PromptType, StructuredPrompt, ValidatedProfile};

const BUSINESS_PLAN_SECTIONS: &[&str] = &[
    "Executive Summary",
    "Market Analysis",
    "Product/Service Description",
    "Business Model",
    "Marketing Strategy",
    "Financial Projections",
    "Funding Requirements",
    "Implementation Timeline",
];

const PRODUCT_CONCEPT_SECTIONS: &[&str] = &[
    "Product Description",
    "Key Features and Benefits",
    "Target User Personas",
    "Unique Value Proposition",
    "Technology Requirements",
    "Development Roadmap",
    "Pricing Strategy",
    "Go-to-Market Approach",
];

fn numbered(sections: &[&str]) -> String {
    sections
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {s}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn business_plan(p: &ValidatedProfile) -> String {
    format!(
        "Create a business plan for a startup targeting the {market} market.\n\n\
         Market Information:\n\
         - Market Size: ${size:.1} Billion\n\
         - CAGR: {cagr:.1}%\n\
         - Key Barriers: {barriers}\n\
         - Target Demographics: {demographics}\n\n\
         The business plan should include:\n{sections}",
        market = p.profile.market_name,
        size = p.validation.market_size_usd_billions,
        cagr = p.validation.cagr_percent,
        barriers = p.profile.barriers_to_entry.join(", "),
        demographics = p.profile.target_demographics.join(", "),
        sections = numbered(BUSINESS_PLAN_SECTIONS),
    )
}

fn product_concept(p: &ValidatedProfile) -> String {
    format!(
        "Design a product concept for the {market} market.\n\n\
         Market Information:\n\
         - Market Size: ${size:.1} Billion\n\
         - CAGR: {cagr:.1}%\n\
         - Target Demographics: {demographics}\n\
         - Potential Business Models: {models}\n\n\
         The product concept should include:\n{sections}",
        market = p.profile.market_name,
        size = p.validation.market_size_usd_billions,
        cagr = p.validation.cagr_percent,
        demographics = p.profile.target_demographics.join(", "),
        models = p.profile.business_model_suggestions.join(", "),
        sections = numbered(PRODUCT_CONCEPT_SECTIONS),
    )
}

/// A business plan and a product concept prompt per validated market, in
/// profile order.
pub fn structured_prompts(profiles: &[ValidatedProfile]) -> Vec<StructuredPrompt> {
    profiles
        .iter()
        .filter(|p| p.is_validated())
        .flat_map(|p| {
            [
                (PromptType::BusinessPlan, business_plan(p)),
                (PromptType::ProductConcept, product_concept(p)),
            ]
            .into_iter()
            .map(move |(prompt_type, prompt)| StructuredPrompt {
                market: p.profile.market_name.clone(),
                prompt_type,
                prompt,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::profile;
    use marketscan_core::types::Validation;

    fn validated(name: &str, is_validated: bool) -> ValidatedProfile {
        ValidatedProfile {
            profile: profile(name, 12.0),
            validation: Validation {
                is_validated,
                validation_score: 8.1,
                market_size_usd_billions: 51.4,
                cagr_percent: 6.2,
                supporting_indicators: vec![],
                validation_sources: vec![],
            },
        }
    }

    #[test]
    fn test_two_prompts_per_validated_market() {
        let prompts = structured_prompts(&[
            validated("Affordable Childcare Solutions", true),
            validated("Mental Health Services", false),
        ]);
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].prompt_type, PromptType::BusinessPlan);
        assert_eq!(prompts[1].prompt_type, PromptType::ProductConcept);
        assert!(prompts.iter().all(|p| p.market == "Affordable Childcare Solutions"));
    }

    #[test]
    fn test_business_plan_text() {
        let prompts = structured_prompts(&[validated("Affordable Childcare Solutions", true)]);
        let text = &prompts[0].prompt;
        assert!(text.starts_with(
            "Create a business plan for a startup targeting the Affordable Childcare Solutions market.\n\nMarket Information:\n"
        ));
        assert!(text.contains("- Market Size: $51.4 Billion\n- CAGR: 6.2%\n"));
        assert!(text.contains("- Key Barriers: Regulations, Staffing\n"));
        assert!(text.ends_with("7. Funding Requirements\n8. Implementation Timeline"));
    }

    #[test]
    fn test_product_concept_text() {
        let prompts = structured_prompts(&[validated("Affordable Childcare Solutions", true)]);
        let text = &prompts[1].prompt;
        assert!(text.starts_with("Design a product concept for the Affordable Childcare Solutions market."));
        assert!(text.contains("- Potential Business Models: SaaS subscription model\n\n"));
        assert!(text.contains("The product concept should include:\n1. Product Description\n"));
        assert!(text.ends_with("8. Go-to-Market Approach"));
    }
}
