//! Builds a handful of document-store queries and prints the compiled
//! N1QL text and parameters.
//!
//! Run with: cargo run --example query_demo

use docql::logging::LogConfig;
use docql::{Expr, N1qlCompiler, OrderDirection, QueryCompiler, QuerySpec, Result};

fn main() -> Result<()> {
    let _guard = LogConfig::debug().init();
    let compiler = N1qlCompiler::new();

    // Direct key lookup against the primary index.
    let by_keys = QuerySpec::new()
        .from("orders")
        .use_keys(vec!["order::1001", "order::1002"], true)?;
    print_compiled("by keys", &compiler.compile(&by_keys)?);

    // Predicate scan forced onto a named secondary index.
    let by_index = QuerySpec::new()
        .select(vec!["id", "total"])
        .from("orders")
        .use_index("orders_by_status", Some("GSI"))?
        .filter(Expr::field("status").eq("open").and(Expr::field("total").gt(100)))
        .order_by("total", OrderDirection::Desc)
        .limit(20);
    print_compiled("by index", &compiler.compile(&by_index)?);

    // A set-combination chain over live and archived orders.
    let combined = QuerySpec::new()
        .from("orders")
        .union_all(QuerySpec::new().from("orders_archive"))
        .except(QuerySpec::new().from("orders_cancelled"));
    print_compiled("combined", &compiler.compile(&combined)?);

    Ok(())
}

fn print_compiled(label: &str, compiled: &docql::CompiledQuery) {
    println!("-- {}", label);
    println!("{}", compiled.text);
    for (i, param) in compiled.params.iter().enumerate() {
        println!("  ${} = {}", i + 1, param);
    }
    println!();
}
