//! Reference N1QL-dialect compiler.
//!
//! Renders a [`QuerySpec`] into Couchbase-style query text with positional
//! `$n` parameters. Literal values never appear inline; they are extracted
//! into the parameter list in emission order, and numbering continues
//! across sub-queries and combinator operands so a whole chain shares one
//! parameter list.

use docql_core::{
    CompiledQuery, Error, Expr, KeyExpr, Operand, QueryCompiler, QuerySpec, Result, SelectColumn,
    Value,
};

/// Compiler for the N1QL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct N1qlCompiler;

impl N1qlCompiler {
    /// Creates a new compiler.
    pub fn new() -> Self {
        N1qlCompiler
    }
}

impl QueryCompiler for N1qlCompiler {
    fn compile(&self, query: &QuerySpec) -> Result<CompiledQuery> {
        let mut params = Vec::new();
        let text = render_query(query, &mut params)?;
        Ok(CompiledQuery { text, params })
    }
}

/// Escapes an identifier with backticks.
fn escape_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn push_param(params: &mut Vec<Value>, value: Value) -> String {
    params.push(value);
    format!("${}", params.len())
}

fn render_query(query: &QuerySpec, params: &mut Vec<Value>) -> Result<String> {
    let mut text = String::from("SELECT ");
    if query.base.distinct {
        text.push_str("DISTINCT ");
    }
    render_projection(&query.base.select, &mut text);

    let names = query
        .base
        .from
        .as_ref()
        .map(|source| source.names())
        .unwrap_or_default();
    if names.is_empty() {
        return Err(Error::Compilation(
            "query has no source collection".to_string(),
        ));
    }
    text.push_str(" FROM ");
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        text.push_str(&escape_ident(name));
    }

    if let Some(lookup) = &query.key_lookup {
        render_key_lookup(lookup, &mut text, params)?;
    }

    if let Some(hint) = &query.index_hint {
        if hint.index.is_empty() {
            return Err(Error::Compilation(
                "USE INDEX requires a non-empty index name".to_string(),
            ));
        }
        text.push_str(" USE INDEX (");
        text.push_str(&escape_ident(&hint.index));
        if let Some(using) = &hint.using {
            text.push_str(" USING ");
            text.push_str(using);
        }
        text.push(')');
    }

    if let Some(filter) = &query.base.filter {
        text.push_str(" WHERE ");
        render_expr(filter, &mut text, params);
    }

    if !query.base.order_by.is_empty() {
        text.push_str(" ORDER BY ");
        for (i, key) in query.base.order_by.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            text.push_str(&escape_ident(&key.field));
            text.push(' ');
            text.push_str(&key.direction.to_string());
        }
    }

    if let Some(limit) = query.base.limit {
        text.push_str(&format!(" LIMIT {}", limit));
    }
    if let Some(offset) = query.base.offset {
        text.push_str(&format!(" OFFSET {}", offset));
    }

    for step in &query.combinators {
        text.push(' ');
        text.push_str(&step.operator.to_string());
        if step.all {
            text.push_str(" ALL");
        }
        text.push(' ');
        match &step.operand {
            Operand::Raw(sql) => {
                if sql.is_empty() {
                    return Err(Error::Compilation(
                        "combinator operand must not be empty".to_string(),
                    ));
                }
                text.push_str(sql);
            }
            Operand::Query(inner) => {
                text.push('(');
                text.push_str(&render_query(inner, params)?);
                text.push(')');
            }
        }
    }

    Ok(text)
}

fn render_projection(columns: &[SelectColumn], text: &mut String) {
    if columns.is_empty() {
        text.push('*');
        return;
    }
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        match column {
            SelectColumn::Wildcard => text.push('*'),
            SelectColumn::Field { name, alias } => {
                text.push_str(&escape_ident(name));
                if let Some(alias) = alias {
                    text.push_str(" AS ");
                    text.push_str(&escape_ident(alias));
                }
            }
            SelectColumn::Raw(sql) => text.push_str(sql),
        }
    }
}

fn render_key_lookup(
    lookup: &docql_core::KeyLookup,
    text: &mut String,
    params: &mut Vec<Value>,
) -> Result<()> {
    if lookup.keys.is_empty() {
        return Err(Error::Compilation(
            "USE KEYS requires at least one key".to_string(),
        ));
    }
    text.push_str(if lookup.use_primary {
        " USE PRIMARY KEYS "
    } else {
        " USE KEYS "
    });
    match &lookup.keys {
        KeyExpr::Single(key) => {
            let placeholder = push_param(params, Value::Str(key.clone()));
            text.push_str(&placeholder);
        }
        KeyExpr::List(keys) => {
            let array = Value::Array(keys.iter().cloned().map(Value::Str).collect());
            let placeholder = push_param(params, array);
            text.push_str(&placeholder);
        }
        KeyExpr::SubQuery(inner) => {
            text.push('(');
            text.push_str(&render_query(inner, params)?);
            text.push(')');
        }
    }
    Ok(())
}

fn render_expr(expr: &Expr, text: &mut String, params: &mut Vec<Value>) {
    match expr {
        Expr::Field(name) => text.push_str(name),
        Expr::Literal(value) => {
            let placeholder = push_param(params, value.clone());
            text.push_str(&placeholder);
        }
        Expr::Cmp { left, op, right } => {
            render_expr(left, text, params);
            text.push_str(&format!(" {} ", op));
            render_expr(right, text, params);
        }
        Expr::Logical { left, op, right } => {
            text.push('(');
            render_expr(left, text, params);
            text.push_str(&format!(" {} ", op));
            render_expr(right, text, params);
            text.push(')');
        }
        Expr::Not(inner) => {
            text.push_str("NOT (");
            render_expr(inner, text, params);
            text.push(')');
        }
        Expr::Like { expr, pattern } => {
            render_expr(expr, text, params);
            let placeholder = push_param(params, Value::Str(pattern.clone()));
            text.push_str(&format!(" LIKE {}", placeholder));
        }
        Expr::In { expr, values } => {
            render_expr(expr, text, params);
            let placeholder = push_param(params, Value::Array(values.clone()));
            text.push_str(&format!(" IN {}", placeholder));
        }
        Expr::Between { expr, low, high } => {
            render_expr(expr, text, params);
            let low = push_param(params, low.clone());
            let high = push_param(params, high.clone());
            text.push_str(&format!(" BETWEEN {} AND {}", low, high));
        }
        Expr::Raw(sql) => text.push_str(sql),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docql_core::OrderDirection;

    fn compile(query: &QuerySpec) -> CompiledQuery {
        N1qlCompiler::new().compile(query).unwrap()
    }

    #[test]
    fn bare_query_selects_star() {
        let compiled = compile(&QuerySpec::new().from("orders"));
        assert_eq!(compiled.text, "SELECT * FROM `orders`");
        assert!(compiled.params.is_empty());
    }

    #[test]
    fn projection_ordering_and_pagination_render_in_clause_order() {
        let query = QuerySpec::new()
            .select(vec!["id", "total"])
            .distinct()
            .from("orders")
            .order_by("total", OrderDirection::Desc)
            .limit(10)
            .offset(20);
        assert_eq!(
            compile(&query).text,
            "SELECT DISTINCT `id`, `total` FROM `orders` \
             ORDER BY `total` DESC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn use_keys_renders_a_positional_parameter() {
        let query = QuerySpec::new()
            .from("orders")
            .use_keys(vec!["order::1", "order::2"], false)
            .unwrap();
        let compiled = compile(&query);
        assert_eq!(compiled.text, "SELECT * FROM `orders` USE KEYS $1");
        assert_eq!(
            compiled.params,
            vec![Value::Array(vec![
                Value::Str("order::1".to_string()),
                Value::Str("order::2".to_string()),
            ])]
        );
    }

    #[test]
    fn primary_keys_variant_changes_the_keyword() {
        let query = QuerySpec::new()
            .from("orders")
            .use_keys("order::1", true)
            .unwrap();
        assert_eq!(
            compile(&query).text,
            "SELECT * FROM `orders` USE PRIMARY KEYS $1"
        );
    }

    #[test]
    fn key_sub_query_is_compiled_inline() {
        let inner = QuerySpec::new()
            .select(vec!["id"])
            .from("recent")
            .filter(Expr::field("age").lt(7));
        let query = QuerySpec::new().from("orders").use_keys(inner, false).unwrap();
        let compiled = compile(&query);
        assert_eq!(
            compiled.text,
            "SELECT * FROM `orders` USE KEYS (SELECT `id` FROM `recent` WHERE age < $1)"
        );
        assert_eq!(compiled.params, vec![Value::Int(7)]);
    }

    #[test]
    fn index_hint_renders_with_and_without_qualifier() {
        let query = QuerySpec::new()
            .from("orders")
            .use_index("orders_by_status", Some("GSI"))
            .unwrap();
        assert_eq!(
            compile(&query).text,
            "SELECT * FROM `orders` USE INDEX (`orders_by_status` USING GSI)"
        );

        let query = QuerySpec::new()
            .from("orders")
            .use_index("orders_by_status", None)
            .unwrap();
        assert_eq!(
            compile(&query).text,
            "SELECT * FROM `orders` USE INDEX (`orders_by_status`)"
        );
    }

    #[test]
    fn where_literals_become_parameters() {
        let query = QuerySpec::new().from("orders").filter(
            Expr::field("status")
                .eq("open")
                .and(Expr::field("total").between(10, 100)),
        );
        let compiled = compile(&query);
        assert_eq!(
            compiled.text,
            "SELECT * FROM `orders` WHERE (status = $1 AND total BETWEEN $2 AND $3)"
        );
        assert_eq!(
            compiled.params,
            vec![
                Value::Str("open".to_string()),
                Value::Int(10),
                Value::Int(100)
            ]
        );
    }

    #[test]
    fn combinator_chain_renders_in_insertion_order() {
        let query = QuerySpec::new()
            .from("orders")
            .union_all(QuerySpec::new().from("archive"))
            .intersect("SELECT * FROM `audit`")
            .except(QuerySpec::new().from("returns"));
        assert_eq!(
            compile(&query).text,
            "SELECT * FROM `orders` \
             UNION ALL (SELECT * FROM `archive`) \
             INTERSECT SELECT * FROM `audit` \
             EXCEPT (SELECT * FROM `returns`)"
        );
    }

    #[test]
    fn parameter_numbering_continues_across_the_chain() {
        let query = QuerySpec::new()
            .from("orders")
            .filter(Expr::field("a").eq(1))
            .union(QuerySpec::new().from("archive").filter(Expr::field("b").eq(2)));
        let compiled = compile(&query);
        assert_eq!(
            compiled.text,
            "SELECT * FROM `orders` WHERE a = $1 \
             UNION (SELECT * FROM `archive` WHERE b = $2)"
        );
        assert_eq!(compiled.params, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn multi_collection_source_lists_every_name() {
        let query = QuerySpec::new().from(vec!["orders", "archive"]);
        assert_eq!(compile(&query).text, "SELECT * FROM `orders`, `archive`");
    }

    #[test]
    fn missing_source_is_a_compilation_error() {
        let err = N1qlCompiler::new().compile(&QuerySpec::new()).unwrap_err();
        assert!(matches!(err, Error::Compilation(_)));
    }

    #[test]
    fn empty_raw_operand_is_a_compilation_error() {
        let query = QuerySpec::new().from("orders").union("");
        let err = N1qlCompiler::new().compile(&query).unwrap_err();
        assert!(matches!(err, Error::Compilation(_)));
    }

    #[test]
    fn backticks_in_identifiers_are_escaped() {
        let query = QuerySpec::new().from("weird`name");
        assert_eq!(compile(&query).text, "SELECT * FROM `weird``name`");
    }
}
