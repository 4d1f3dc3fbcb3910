#[cfg(test)]
mod tests {
    use querydef::resolver::{
        AnnotationConvention, DefaultFieldNameResolver, FieldCasing, FieldNameResolver,
        JSON_PROPERTY, NamingConvention, SERDE_RENAME,
    };
    use querydef::{Expr, Member};

    fn camel() -> DefaultFieldNameResolver {
        DefaultFieldNameResolver::new(FieldCasing::Camel)
    }

    fn preserve() -> DefaultFieldNameResolver {
        DefaultFieldNameResolver::new(FieldCasing::Preserve)
    }

    // ========================================================================
    // Casing Tests
    // ========================================================================

    #[test]
    fn test_resolves_simple_member_with_camel_case() {
        let expr = Expr::binding("c").field(Member::new("Prop"));

        assert_eq!(camel().resolve(&expr), Some("c.prop".to_string()));
    }

    #[test]
    fn test_resolves_simple_member_preserving_case() {
        let expr = Expr::binding("c").field(Member::new("Prop"));

        assert_eq!(preserve().resolve(&expr), Some("c.Prop".to_string()));
    }

    #[test]
    fn test_camel_case_only_lowers_first_letter() {
        let expr = Expr::binding("c").field(Member::new("SubDocId"));

        assert_eq!(camel().resolve(&expr), Some("c.subDocId".to_string()));
    }

    #[test]
    fn test_resolves_nested_members() {
        let expr = Expr::binding("c")
            .field(Member::new("SubDoc"))
            .field(Member::new("Prop"));

        assert_eq!(camel().resolve(&expr), Some("c.subDoc.prop".to_string()));
    }

    // ========================================================================
    // Naming Convention Tests
    // ========================================================================

    #[test]
    fn test_resolves_serde_rename_annotation() {
        let expr = Expr::binding("c")
            .field(Member::new("FirstName").with_annotation(SERDE_RENAME, "first_name"));

        assert_eq!(camel().resolve(&expr), Some("c.first_name".to_string()));
    }

    #[test]
    fn test_resolves_json_property_annotation() {
        let expr = Expr::binding("c")
            .field(Member::new("FirstName").with_annotation(JSON_PROPERTY, "fname"));

        assert_eq!(camel().resolve(&expr), Some("c.fname".to_string()));
    }

    #[test]
    fn test_first_convention_wins_when_both_declared() {
        let member = Member::new("FirstName")
            .with_annotation(SERDE_RENAME, "from_serde")
            .with_annotation(JSON_PROPERTY, "from_json");
        let expr = Expr::binding("c").field(member);

        assert_eq!(camel().resolve(&expr), Some("c.from_serde".to_string()));
    }

    #[test]
    fn test_empty_annotation_value_is_ignored() {
        let expr = Expr::binding("c")
            .field(Member::new("FirstName").with_annotation(SERDE_RENAME, ""));

        assert_eq!(camel().resolve(&expr), Some("c.firstName".to_string()));
    }

    #[test]
    fn test_declared_names_are_used_verbatim_regardless_of_casing() {
        let expr = Expr::binding("c")
            .field(Member::new("FirstName").with_annotation(SERDE_RENAME, "First_Name"));

        // The casing policy applies only to the fallback, never to a
        // declared name.
        assert_eq!(camel().resolve(&expr), Some("c.First_Name".to_string()));
    }

    #[test]
    fn test_nested_members_resolve_annotations_independently() {
        let expr = Expr::binding("c")
            .field(Member::new("SubDoc"))
            .field(Member::new("FirstName").with_annotation(SERDE_RENAME, "first_name"));

        assert_eq!(
            camel().resolve(&expr),
            Some("c.subDoc.first_name".to_string())
        );
    }

    #[test]
    fn test_custom_convention_order() {
        let conventions: Vec<Box<dyn NamingConvention>> = vec![
            Box::new(AnnotationConvention::new("store_name")),
            Box::new(AnnotationConvention::new(SERDE_RENAME)),
        ];
        let resolver =
            DefaultFieldNameResolver::with_conventions(conventions, FieldCasing::Camel);

        let expr = Expr::binding("c").field(
            Member::new("FirstName")
                .with_annotation("store_name", "fn_store")
                .with_annotation(SERDE_RENAME, "fn_serde"),
        );

        assert_eq!(resolver.resolve(&expr), Some("c.fn_store".to_string()));
    }

    // ========================================================================
    // Chain Shape Tests
    // ========================================================================

    #[test]
    fn test_bare_binding_resolves_to_its_name() {
        assert_eq!(camel().resolve(&Expr::binding("c")), Some("c".to_string()));
    }

    #[test]
    fn test_custom_binding_name_is_the_path_root() {
        let expr = Expr::binding("doc").field(Member::new("Prop"));

        assert_eq!(camel().resolve(&expr), Some("doc.prop".to_string()));
    }

    #[test]
    fn test_empty_binding_name_does_not_resolve() {
        assert_eq!(camel().resolve(&Expr::binding("")), None);
    }

    #[test]
    fn test_conversion_is_transparent_around_member() {
        let expr = Expr::binding("c").field(Member::new("Prop")).convert();

        assert_eq!(camel().resolve(&expr), Some("c.prop".to_string()));
    }

    #[test]
    fn test_conversion_is_transparent_inside_chain() {
        let expr = Expr::binding("c")
            .convert()
            .field(Member::new("SubDoc"))
            .field(Member::new("Prop"));

        assert_eq!(camel().resolve(&expr), Some("c.subDoc.prop".to_string()));
    }

    #[test]
    fn test_nested_conversions_are_transparent() {
        let expr = Expr::binding("c").field(Member::new("Prop")).convert().convert();

        assert_eq!(camel().resolve(&expr), Some("c.prop".to_string()));
    }

    // ========================================================================
    // Negative Results (not errors)
    // ========================================================================

    #[test]
    fn test_constant_does_not_resolve() {
        assert_eq!(camel().resolve(&Expr::constant("word")), None);
    }

    #[test]
    fn test_captured_value_does_not_resolve() {
        assert_eq!(camel().resolve(&Expr::captured(42)), None);
    }

    #[test]
    fn test_member_rooted_at_constant_does_not_resolve() {
        let expr = Expr::constant("not a binding").field(Member::new("Prop"));

        assert_eq!(camel().resolve(&expr), None);
    }

    #[test]
    fn test_call_does_not_resolve() {
        let expr = Expr::Call {
            function: "len".to_string(),
            args: vec![],
        };

        assert_eq!(camel().resolve(&expr), None);
    }

    #[test]
    fn test_conversion_of_unresolvable_does_not_resolve() {
        assert_eq!(camel().resolve(&Expr::constant(1).convert()), None);
    }
}
