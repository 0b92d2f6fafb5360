//! Handlers for the pipeline commands.
//!
//! Each handler runs one stage (or the whole pipeline) and prints a short
//! summary of what it wrote. Details go to the tracing log.

use std::path::Path;

use marketscan_core::Result;
use marketscan_pipeline::collect::import_reddit;
use marketscan_pipeline::{
    StageContext, analyze, collect, report, run_all, synthesize, validate, verify_file,
};

/// Run the collection stage.
pub fn cmd_collect(ctx: &StageContext) -> Result<()> {
    let output = collect::run(ctx)?;
    println!(
        "Collected {} articles for {} queries into {}",
        output.article_count,
        output.news.len(),
        ctx.store().news_dir().display()
    );
    Ok(())
}

/// Analyze an offline Reddit export.
pub fn cmd_import_reddit(ctx: &StageContext, file: &Path) -> Result<()> {
    let output = import_reddit(ctx, file)?;
    println!(
        "Imported {} submissions: {} subreddits, {} keywords",
        output.submission_count,
        output.subreddits.len(),
        output.keywords.len()
    );
    Ok(())
}

/// Run the analysis stage.
pub fn cmd_analyze(ctx: &StageContext) -> Result<()> {
    let combined = analyze::run(ctx)?;
    println!(
        "Analyzed {} underserved markets, {} technologies and {} news queries",
        combined.underserved_markets.markets.len(),
        combined.emerging_technologies.technologies.len(),
        combined.news_sentiment.sentiment_by_query.len()
    );
    println!(
        "Wrote {}",
        ctx.store().result(analyze::COMBINED_ANALYSIS_FILE).display()
    );
    Ok(())
}

/// Run the synthesis stage.
pub fn cmd_synthesize(ctx: &StageContext) -> Result<()> {
    let output = synthesize::run(ctx)?;
    println!(
        "Ranked {} markets and profiled {}",
        output.ranked.len(),
        output.profiles.len()
    );
    for (i, market) in output.ranked.iter().take(output.profiles.len()).enumerate() {
        println!("{:>3}. {} ({:.2})", i + 1, market.name, market.total_score);
    }
    Ok(())
}

/// Run the validation stage.
pub fn cmd_validate(ctx: &StageContext) -> Result<()> {
    let output = validate::run(ctx)?;
    println!(
        "Validated {} of {} market profiles",
        output.validated_count,
        output.profiles.len()
    );
    Ok(())
}

/// Run the report stage.
pub fn cmd_report(ctx: &StageContext) -> Result<()> {
    let output = report::run(ctx)?;
    println!("Wrote {}", output.summary.display());
    match &output.final_report {
        Some(path) => println!("Wrote {}", path.display()),
        None => println!("Final report skipped: source reports are missing"),
    }
    if !output.missing.is_empty() {
        println!("Missing key files: {}", output.missing.join(", "));
    }
    Ok(())
}

/// Run every stage.
pub fn cmd_run(ctx: &StageContext) -> Result<()> {
    let summary = run_all(ctx)?;
    println!("Run {}", summary.run_id);
    println!(
        "  {} articles, {} markets ranked, {} profiled, {} validated",
        summary.article_count,
        summary.market_count,
        summary.profile_count,
        summary.validated_count
    );
    let reports = [
        &summary.opportunities_report,
        &summary.validation_report,
        &summary.final_report,
    ];
    for path in reports.into_iter().flatten() {
        println!("  {}", path.display());
    }
    if summary.opportunities_report.is_none() {
        println!("No market profiles; reports were not written");
    }
    Ok(())
}

/// Verify a generated report.
pub fn cmd_verify(path: &Path) -> Result<()> {
    let check = verify_file(path)?;
    println!(
        "{}: {} entries, scores in descending order",
        check.title,
        check.entries.len()
    );
    for entry in &check.entries {
        println!("{:>3}. {} ({})", entry.rank, entry.name, entry.score);
    }
    Ok(())
}
