//! Markdown rendering of the opportunities report.

use std::fmt::Write;

use marketscan_core::types::MarketProfile;

/// Related technologies and trends listed per entry.
const RELATED_LIMIT: usize = 3;

/// Title of the opportunities report.
pub const TITLE: &str = "Underserved Market Opportunities Report";

const EXECUTIVE_SUMMARY: &str = "This report identifies high-potential underserved markets \
based on comprehensive analysis of economic indicators, market trends, news sentiment, and web \
scraping data. The markets are ranked by opportunity score, which combines multiple factors \
including market gap, mention frequency, sentiment, and alignment with growth sectors.";

const METHODOLOGY: &str = "## Methodology

The underserved markets were identified using a multi-factor scoring system that incorporates:

1. **Gap Score:** Quantifies the degree to which a market is underserved based on economic indicators
2. **Mention Score:** Measures the frequency of market mentions in business and technology publications
3. **Sentiment Score:** Evaluates the positive sentiment associated with the market in news and publications
4. **Growth Alignment:** Assesses alignment with identified economic growth sectors
5. **Technology Alignment:** Measures connection to emerging technologies with high market readiness
6. **Sector Alignment:** Evaluates alignment with trending business sectors

## Next Steps

For each identified market opportunity, we recommend:

1. Conducting targeted consumer research to validate market demand
2. Analyzing competitive landscape to identify specific niches
3. Developing minimum viable product concepts
4. Testing business model assumptions with potential customers
5. Creating detailed financial projections and funding requirements
";

/// Render the opportunities report for profiles in rank order.
pub fn render(profiles: &[MarketProfile], generated_on: &str) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "# {title}\nGenerated on: {generated_on}\n\n\
         ## Executive Summary\n\n{summary}\n\n\
         ## Top Underserved Market Opportunities\n\n",
        title = TITLE,
        summary = EXECUTIVE_SUMMARY,
    );

    for (i, profile) in profiles.iter().enumerate() {
        render_entry(&mut out, i + 1, profile);
    }

    out.push_str(METHODOLOGY);
    out
}

fn render_entry(out: &mut String, rank: usize, profile: &MarketProfile) {
    let name = &profile.market_name;
    let _ = write!(
        out,
        "### {rank}. {name}\n\n\
         **Opportunity Score:** {score:.2}  \n\
         **Growth Potential:** {growth}  \n\
         **Key Barriers to Entry:** {barriers}\n\n\
         **Market Overview:**  \n\
         {name} represents a significant opportunity based on data from {sources}. \n\
         This market shows strong alignment with current economic growth sectors and emerging technologies.\n\n\
         **Target Demographics:**\n",
        score = profile.opportunity_score,
        growth = profile.growth_potential,
        barriers = profile.barriers_to_entry.join(", "),
        sources = profile.data_sources.join(", "),
    );
    bullets(out, &profile.target_demographics);

    out.push_str("\n**Potential Business Models:**\n");
    bullets(out, &profile.business_model_suggestions);

    if !profile.related_technologies.is_empty() {
        out.push_str("\n**Related Technologies:**\n");
        for tech in profile.related_technologies.iter().take(RELATED_LIMIT) {
            let _ = writeln!(
                out,
                "- {} (Market Readiness: {:.1}, Trend: {})",
                tech.name, tech.market_readiness, tech.investment_trend
            );
        }
    }

    if !profile.related_trends.is_empty() {
        out.push_str("\n**Related Market Trends:**\n");
        for trend in profile.related_trends.iter().take(RELATED_LIMIT) {
            let _ = writeln!(out, "- {} ({})", trend.title, trend.source);
        }
    }

    out.push_str("\n---\n\n");
}

/// Append one `- item` line per entry.
pub(crate) fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
