//! Executive summary and the combined final report.

use std::fmt::Write;

use marketscan_core::types::ValidatedProfile;

/// Title of the executive summary.
pub const SUMMARY_TITLE: &str = "Automated Market Research Tool: Executive Summary";

/// Title of the final report.
pub const FINAL_TITLE: &str = "Automated Market Research Tool: Final Report";

const OVERVIEW: &str = "## Overview

This report presents the findings of our automated market research tool designed to identify underserved markets with high growth potential. The tool analyzed multiple data sources including economic indicators, news sentiment, web trends, and market mentions to identify and validate promising market opportunities.

## Key Findings

";

const SUMMARY_CLOSING: &str = "## Methodology

Our automated market research approach followed these key steps:

1. **Data Collection:** Gathered data from multiple sources including economic indicators, news articles, and web trends
2. **Data Analysis:** Processed and analyzed data to identify patterns and correlations
3. **Market Identification:** Applied scoring criteria to identify potential underserved markets
4. **Validation:** Cross-referenced findings with external datasets and authoritative sources
5. **Reporting:** Compiled comprehensive reports with chart data and actionable insights

## Next Steps

Based on these findings, we recommend:

1. Conducting deeper market research into the top 3 identified opportunities
2. Developing specific business concepts tailored to each validated market
3. Creating detailed financial models and funding requirements
4. Establishing key performance indicators for measuring success
5. Prioritizing markets based on alignment with organizational capabilities and strategic goals
";

const TABLE_OF_CONTENTS: &str = "## Table of Contents

1. Executive Summary
2. Underserved Market Opportunities
3. Market Validation
4. Methodology
5. Recommendations
6. Appendix: Data Sources and Chart Data
";

const METHODOLOGY: &str = "# 4. Methodology

## Data Collection and Processing

The automated market research tool collected and processed data from multiple sources:

1. **Economic Indicators:** GDP growth, inflation rates, unemployment, private consumption, domestic investment, and foreign direct investment data across major economies.

2. **News Analysis:** Sentiment analysis of news articles related to market opportunities, emerging industries, and business trends.

3. **Web Trends:** Analysis of business and technology publications for mentions of underserved markets and emerging opportunities.

4. **Market Mentions:** Frequency and sentiment analysis of market mentions across business and technology sources.

## Market Identification Process

Markets were identified and scored using a multi-factor methodology:

1. **Gap Score:** Quantitative measure of how underserved a market is based on economic indicators
2. **Mention Score:** Frequency of market mentions in business and technology publications
3. **Sentiment Score:** Positive sentiment associated with the market in news and publications
4. **Growth Alignment:** Alignment with identified economic growth sectors
5. **Technology Alignment:** Connection to emerging technologies with high market readiness
6. **Sector Alignment:** Alignment with trending business sectors

## Validation Methodology

Identified markets were validated using:

1. Market size estimates from industry reports and economic databases
2. Compound Annual Growth Rate (CAGR) projections
3. Supporting economic and demographic indicators
4. Cross-referencing with authoritative market research sources
";

const RECOMMENDATIONS: &str = "# 5. Recommendations

## Strategic Recommendations

1. **Prioritize Top 3 Markets:** Focus initial efforts on the highest-scoring validated markets
2. **Conduct Deep-Dive Research:** Perform detailed competitive analysis within each priority market
3. **Develop MVP Concepts:** Create minimum viable product concepts for each target market
4. **Test Business Models:** Validate business model assumptions with potential customers
5. **Create Financial Projections:** Develop detailed financial models and funding requirements

## Implementation Roadmap

1. **Month 1-2:** Conduct detailed market research on top opportunities
2. **Month 3-4:** Develop product concepts and business models
3. **Month 5-6:** Test concepts with potential customers
4. **Month 7-8:** Refine business plans based on feedback
5. **Month 9-12:** Develop go-to-market strategy and secure funding
";

const APPENDIX: &str = "# 6. Appendix: Data Sources and Chart Data

## Chart Data

- Top Underserved Markets by Opportunity Score (`top_underserved_markets.csv`)
- Market Score Components Analysis (`market_score_components.csv`)
- Common Market Barriers (`common_market_barriers.csv`)
- Validated Market Size and Projected CAGR (`validated_markets.csv`)

## Data Sources

- Economic indicators and market data
- News and web trend analysis
- Market validation datasets
- Industry reports and publications
";

/// Render the executive summary, listing up to `top` validated markets by
/// validation score.
pub fn executive_summary(profiles: &[ValidatedProfile], top: usize, generated_on: &str) -> String {
    let mut validated: Vec<&ValidatedProfile> =
        profiles.iter().filter(|p| p.is_validated()).collect();
    validated.sort_by(|a, b| {
        b.validation
            .validation_score
            .total_cmp(&a.validation.validation_score)
    });

    let mut out = format!("# {SUMMARY_TITLE}\nGenerated on: {generated_on}\n\n{OVERVIEW}");
    let _ = write!(
        out,
        "- **{count} validated underserved markets** were identified with strong growth potential\n\
         - Market opportunities span multiple sectors including healthcare, technology, sustainability, and education\n\
         - Validation confirms substantial market sizes and strong growth projections (CAGR)\n\
         - Common barriers to entry include infrastructure limitations, regulatory challenges, and initial investment requirements\n\n\
         ## Top {top} Underserved Market Opportunities\n\n",
        count = validated.len(),
    );

    for (i, p) in validated.iter().take(top).enumerate() {
        let _ = write!(
            out,
            "### {rank}. {name}\n\
             - **Validation Score:** {score:.1}/10\n\
             - **Estimated Market Size:** ${size:.1} Billion\n\
             - **Projected CAGR:** {cagr:.1}%\n\n",
            rank = i + 1,
            name = p.profile.market_name,
            score = p.validation.validation_score,
            size = p.validation.market_size_usd_billions,
            cagr = p.validation.cagr_percent,
        );
    }

    out.push_str(SUMMARY_CLOSING);
    out
}

/// Everything after the first line of a Markdown document.
pub fn without_title(markdown: &str) -> &str {
    markdown.split_once('\n').map_or("", |(_, rest)| rest)
}

/// Combine the summary and both reports into the final report.
pub fn final_report(
    summary: &str,
    market_report: &str,
    validation_report: &str,
    generated_on: &str,
) -> String {
    let sections = [
        format!("# {FINAL_TITLE}\nGenerated on: {generated_on}\n\n{TABLE_OF_CONTENTS}"),
        format!("# 1. Executive Summary\n\n{}", without_title(summary)),
        format!(
            "# 2. Underserved Market Opportunities\n\n{}",
            without_title(market_report)
        ),
        format!("# 3. Market Validation\n\n{}", without_title(validation_report)),
        METHODOLOGY.to_string(),
        RECOMMENDATIONS.to_string(),
        APPENDIX.to_string(),
    ];
    sections.join("\n---\n\n")
}
