//! Markdown rendering of the validation report.

use std::fmt::Write;

use marketscan_core::types::ValidatedProfile;

use crate::synthesize::report::bullets;

/// Title of the validation report.
pub const TITLE: &str = "Underserved Market Validation Report";

const INTRODUCTION: &str = "## Executive Summary

This report validates the previously identified underserved market opportunities using external datasets and authoritative sources. The validation process assessed market size, growth rates (CAGR), and supporting economic indicators to confirm the viability and potential of each market opportunity.

## Validation Methodology

The validation process incorporated:
1. Market size estimates from industry reports and economic databases
2. Compound Annual Growth Rate (CAGR) projections
3. Supporting economic and demographic indicators
4. Cross-referencing with authoritative market research sources

## Validated Market Opportunities

";

const CONCLUSION: &str = "## Conclusion

The validation process confirms that the identified underserved markets represent significant opportunities with substantial market sizes and strong growth projections. These markets are supported by demographic trends, economic indicators, and industry analyses from authoritative sources.

The validated markets show strong alignment between our initial opportunity scoring methodology and external market validation metrics, confirming the effectiveness of our market identification approach.

## Recommendations

Based on the validated market opportunities, we recommend:

1. Prioritizing market entry strategies for the top 3-5 validated markets
2. Conducting deeper competitive analysis within each validated market
3. Developing specific product concepts and business models tailored to each opportunity
4. Creating financial models and funding requirements for market entry
5. Establishing key performance indicators for measuring success in each market
";

/// Render the validation report. Only validated profiles are listed,
/// numbered in the order given.
pub fn render(profiles: &[ValidatedProfile], generated_on: &str) -> String {
    let mut out = format!("# {TITLE}\nGenerated on: {generated_on}\n\n{INTRODUCTION}");

    for (i, validated) in profiles.iter().filter(|p| p.is_validated()).enumerate() {
        render_entry(&mut out, i + 1, validated);
    }

    out.push_str(CONCLUSION);
    out
}

fn render_entry(out: &mut String, rank: usize, validated: &ValidatedProfile) {
    let profile = &validated.profile;
    let validation = &validated.validation;
    let _ = write!(
        out,
        "### {rank}. {name}\n\n\
         **Validation Score:** {score:.1}/10  \n\
         **Original Opportunity Score:** {opportunity:.2}  \n\
         **Estimated Market Size:** ${size:.1} Billion  \n\
         **Projected CAGR:** {cagr:.1}%  \n\
         **Growth Potential:** {growth}\n\n\
         **Supporting Indicators:**\n",
        name = profile.market_name,
        score = validation.validation_score,
        opportunity = profile.opportunity_score,
        size = validation.market_size_usd_billions,
        cagr = validation.cagr_percent,
        growth = profile.growth_potential,
    );
    bullets(out, &validation.supporting_indicators);

    out.push_str("\n**Validation Sources:**\n");
    bullets(out, &validation.validation_sources);

    out.push_str("\n**Key Barriers to Entry:**\n");
    bullets(out, &profile.barriers_to_entry);

    out.push_str("\n**Target Demographics:**\n");
    bullets(out, &profile.target_demographics);

    out.push_str("\n---\n\n");
}
