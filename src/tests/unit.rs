mod unit_tests {
    use crate::{Epure, FlagOptions, MISSING_FIELD, RuleConfig};

    #[test]
    fn missing_fields_become_the_canonical_literal() {
        let epure = Epure::builder().build().unwrap();
        assert_eq!(
            epure.clean_body(None, &FlagOptions::full()).unwrap(),
            MISSING_FIELD
        );
        assert_eq!(
            epure.clean_header(None, &FlagOptions::full()).unwrap(),
            MISSING_FIELD
        );
    }

    #[test]
    fn clean_text_canonicalizes() {
        let epure = Epure::builder().build().unwrap();
        assert_eq!(
            epure.clean_text("Bonjour   Madame").unwrap(),
            "bonjour madame"
        );
        assert_eq!(epure.clean_text("pièce\njointe").unwrap(), "piecejointe");
        assert_eq!(epure.clean_text("> devis <").unwrap(), "devis");
    }

    #[test]
    fn builder_accepts_custom_tables() {
        let mut config = RuleConfig::default();
        config.flags = vec![(r"\d+".to_string(), " flag_num_ ".to_string())];
        config.labels = vec![" flag_num_ ".to_string()];
        let epure = Epure::builder().rules(config).build().unwrap();
        assert_eq!(
            epure
                .clean_body(Some("salle 12"), &FlagOptions::full())
                .unwrap(),
            "salle  flag_num_ "
        );
    }

    #[test]
    fn invalid_custom_pattern_fails_at_build() {
        let mut config = RuleConfig::default();
        config.header.push(("(".to_string(), String::new()));
        assert!(Epure::builder().rules(config).build().is_err());
    }

    #[test]
    fn extended_transliteration_is_opt_in() {
        let default = Epure::builder().build().unwrap();
        let extended = Epure::builder()
            .use_extended_transliteration(true)
            .build()
            .unwrap();
        assert_eq!(
            default.clean_text("lettre œcuménique").unwrap(),
            "lettre cumenique"
        );
        assert_eq!(
            extended.clean_text("lettre œcuménique").unwrap(),
            "lettre oecumenique"
        );
    }

    #[test]
    fn custom_pipeline_with_apostrophe_stage() {
        use crate::context::Context;
        use crate::{LowerCase, Pipeline, Stage, StripApostrophes};
        use std::borrow::Cow;
        use std::sync::Arc;

        let pipeline = Pipeline::new(vec![
            Arc::new(LowerCase) as Arc<dyn Stage>,
            Arc::new(StripApostrophes),
        ]);
        let ctx = Context::default();
        let out = pipeline
            .process(Cow::Borrowed("J'ai l'heure"), &ctx)
            .unwrap();
        assert_eq!(out, "j ai l heure");
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let epure = std::sync::Arc::new(Epure::builder().build().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let epure = std::sync::Arc::clone(&epure);
                std::thread::spawn(move || {
                    epure
                        .clean_body(Some("appelez le 01 23 45 67 89"), &FlagOptions::full())
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "appelez le  flag_phone_ ");
        }
    }
}
