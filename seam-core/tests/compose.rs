#[cfg(test)]
mod tests {
    use seam_core::{
        Cursor, Expr, Filter, JoinFilter, JoinType, Parameter, Result, Row, RowNames, Selector,
        TypeDef, VecCursor, WhereFilter, apply, dedup_joins, fold_wheres,
    };
    use std::sync::Arc;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Records the fragments threaded onto it and replays canned rows.
    #[derive(Default)]
    struct Recorder {
        joins: Vec<(JoinType, String, Expr)>,
        wheres: Vec<(Expr, Vec<Parameter>)>,
        rows: Vec<Row>,
    }

    impl Selector for Recorder {
        type Cursor = VecCursor;

        fn join(mut self, kind: JoinType, table: &str, on: Expr) -> Self {
            self.joins.push((kind, table.into(), on));
            self
        }

        fn where_clause(mut self, predicate: Expr, params: Vec<Parameter>) -> Self {
            self.wheres.push((predicate, params));
            self
        }

        async fn execute(self) -> Result<Self::Cursor> {
            let labels: RowNames = Arc::from(Vec::<String>::new());
            Ok(VecCursor::new(labels, self.rows))
        }
    }

    #[test]
    fn duplicate_join_with_different_on_is_dropped() {
        init_logs();
        let joins = vec![
            JoinFilter::on_columns(JoinType::Inner, "orders", "users.id", "orders.user_id"),
            JoinFilter::new(
                JoinType::Inner,
                "orders",
                Expr::columns_equal("users.id", "orders.owner_id"),
            ),
            JoinFilter::on_columns(JoinType::Left, "orders", "users.id", "orders.user_id"),
        ];
        let kept = dedup_joins(joins);
        assert_eq!(kept.len(), 2);
        // The first ON condition survives; the conflicting repeat is gone.
        assert_eq!(
            kept[0].on,
            Expr::columns_equal("users.id", "orders.user_id")
        );
        assert_eq!(kept[1].kind, JoinType::Left);
    }

    #[test]
    fn dedup_preserves_encounter_order() {
        let joins = vec![
            JoinFilter::on_columns(JoinType::Left, "a", "x.a", "a.x"),
            JoinFilter::on_columns(JoinType::Inner, "b", "x.b", "b.x"),
            JoinFilter::on_columns(JoinType::Left, "a", "x.a2", "a.x2"),
            JoinFilter::on_columns(JoinType::Full, "c", "x.c", "c.x"),
        ];
        let kept = dedup_joins(joins);
        assert_eq!(
            kept.iter().map(|j| j.table.as_str()).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn fold_wheres_conjoins_left_to_right() {
        let folded = fold_wheres([
            WhereFilter::with_params(Expr::eq("a", 1), vec![Parameter::new("a1", TypeDef::int(1))]),
            WhereFilter::with_params(Expr::eq("b", 2), vec![Parameter::new("b1", TypeDef::int(2))]),
            WhereFilter::new(Expr::eq("c", 3)),
        ])
        .unwrap();
        assert_eq!(
            folded.predicate,
            Expr::eq("a", 1).and(Expr::eq("b", 2)).and(Expr::eq("c", 3))
        );
        assert_eq!(
            folded.params.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["a1", "b1"]
        );
        assert_eq!(fold_wheres([]), None);
    }

    #[test]
    fn apply_threads_joins_then_one_where() {
        let handle = apply(
            Recorder::default(),
            [
                Filter::where_clause(Expr::eq("a", 1)),
                Filter::join_on_columns(JoinType::Inner, "orders", "users.id", "orders.user_id"),
                Filter::Empty,
                Filter::where_clause(Expr::eq("b", 2)),
                Filter::join_on_columns(JoinType::Inner, "orders", "users.id", "orders.owner_id"),
            ],
        );
        assert_eq!(handle.joins.len(), 1);
        assert_eq!(handle.joins[0].1, "orders");
        assert_eq!(handle.wheres.len(), 1);
        assert_eq!(
            handle.wheres[0].0,
            Expr::eq("a", 1).and(Expr::eq("b", 2))
        );
    }

    #[test]
    fn apply_of_empties_touches_nothing() {
        let handle = apply(Recorder::default(), [Filter::Empty, Filter::Empty]);
        assert!(handle.joins.is_empty());
        assert!(handle.wheres.is_empty());
        let handle = apply(Recorder::default(), []);
        assert!(handle.joins.is_empty());
        assert!(handle.wheres.is_empty());
    }

    #[tokio::test]
    async fn executed_handle_yields_its_cursor() {
        let handle = apply(Recorder::default(), [Filter::where_clause(Expr::eq("a", 1))]);
        let mut cursor = handle.execute().await.unwrap();
        assert!(!cursor.advance().await.unwrap());
        assert!(cursor.row().is_none());
    }
}
