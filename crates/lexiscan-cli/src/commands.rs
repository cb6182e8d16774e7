use anyhow::{Context, Result};
use comfy_table::Table;

use lexiscan_cli::pipeline::{AuditOptions, AuditOutcome, StdoutProgress, run_audit};
use lexiscan_ingest::read_lexicon;

use crate::cli::{AuditArgs, CategoriesArgs};
use crate::summary::apply_table_style;

pub fn run_audit_command(args: &AuditArgs) -> Result<AuditOutcome> {
    let options = AuditOptions {
        lexicon: args.lexicon.clone(),
        metadata: args.metadata.clone(),
        categories: args.categories.clone(),
        columns: args.columns.clone(),
        id_column: args.id_column.clone(),
        export_columns: args.export_columns.clone(),
        output: args.output.clone(),
        dry_run: args.dry_run,
    };
    run_audit(&options, &mut StdoutProgress)
}

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let lexicon = read_lexicon(&args.lexicon)
        .with_context(|| format!("load lexicon {}", args.lexicon.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["Category", "Terms"]);
    apply_table_style(&mut table);
    for category in lexicon.categories() {
        table.add_row(vec![
            category.clone(),
            lexicon.category_term_count(category).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
