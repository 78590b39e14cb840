use std::io::Write;
use verdure::{GrowthLimits, LsysGrammar, VerdureError};

#[test]
fn axiom_is_generation_zero() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("F\nF->FF");

    assert_eq!(grammar.generation(0).unwrap(), "F");
    assert_eq!(grammar.generation(1).unwrap(), "FF");
    assert_eq!(grammar.generation(2).unwrap(), "FFFF");
}

#[test]
fn memoized_generations_match_direct_recomputation() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("F\nF->FF+[+F-F-F]-[-F+F+F]");

    // Manual recomputation must agree byte for byte with the memoized path.
    let mut expected = String::from("F");
    for n in 0..5 {
        assert_eq!(grammar.generation(n).unwrap(), expected);
        expected = grammar.rewrite(&expected);
    }

    // Repeated and out-of-order requests return the cached strings.
    let gen3 = grammar.generation(3).unwrap().to_owned();
    assert_eq!(grammar.generation(1).unwrap(), "FF+[+F-F-F]-[-F+F+F]");
    assert_eq!(grammar.generation(3).unwrap(), gen3);
}

#[test]
fn rewrite_length_is_sum_of_replacement_lengths() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("FX\nF->FF\nX->F[+X][-X]");

    let input = "FXY";
    let expected: usize = input
        .chars()
        .map(|c| grammar.production(c).map_or(1, str::len))
        .sum();
    assert_eq!(grammar.rewrite(input).len(), expected);
}

#[test]
fn bracketed_two_rule_grammar() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("A\nA->B[+A]B\nB->BB");

    assert_eq!(grammar.generation(1).unwrap(), "B[+A]B");
    // One pass replaces each symbol independently: B->BB on the outer pair,
    // the A expands once, and the brackets carry through unchanged.
    assert_eq!(grammar.generation(2).unwrap(), "BB[+B[+A]B]BB");

    let gen2 = grammar.generation(2).unwrap();
    assert_eq!(gen2.matches('[').count(), 2);
    assert_eq!(gen2.matches(']').count(), 2);
}

#[test]
fn source_round_trips_exactly() {
    let text = "F F\nF -> F f\n\nf->ff";
    let mut grammar = LsysGrammar::new();
    grammar.load_str(text);

    assert_eq!(grammar.source(), text);
    // Whitespace is stripped from directives but not from the stored text.
    assert_eq!(grammar.axiom(), "FF");
    assert_eq!(grammar.production('F'), Some("Ff"));
    assert_eq!(grammar.production('f'), Some("ff"));
}

#[test]
fn later_directives_overwrite_earlier_ones() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("A\nF->A\nF->B\nB");

    assert_eq!(grammar.production('F'), Some("B"));
    assert_eq!(grammar.axiom(), "B");
}

#[test]
fn axiom_only_grammar_is_a_fixed_point() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("F+F-F");

    for n in 0..6 {
        assert_eq!(grammar.generation(n).unwrap(), "F+F-F");
    }
}

#[test]
fn unset_axiom_yields_empty_generations() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("F->FF");

    assert_eq!(grammar.axiom(), "");
    assert_eq!(grammar.generation(0).unwrap(), "");
    assert_eq!(grammar.generation(4).unwrap(), "");
}

#[test]
fn malformed_rule_heads_are_skipped() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("F\n->FF\nAB->C\nF->F+F");

    assert_eq!(grammar.production_count(), 1);
    assert_eq!(grammar.generation(1).unwrap(), "F+F");
}

#[test]
fn loading_replaces_all_prior_state() {
    let mut grammar = LsysGrammar::new();
    grammar.load_str("F\nF->FF");
    assert_eq!(grammar.generation(2).unwrap(), "FFFF");

    grammar.load_str("A");
    assert_eq!(grammar.axiom(), "A");
    assert_eq!(grammar.production('F'), None);
    assert_eq!(grammar.generation(2).unwrap(), "A");
}

#[test]
fn generation_cap_is_enforced() {
    let mut grammar = LsysGrammar::with_limits(GrowthLimits {
        max_generation: 3,
        max_symbols: 1 << 20,
    });
    grammar.load_str("F\nF->FF");

    assert_eq!(grammar.generation(3).unwrap(), "FFFFFFFF");
    match grammar.generation(4) {
        Err(VerdureError::GenerationLimit { requested, limit }) => {
            assert_eq!(requested, 4);
            assert_eq!(limit, 3);
        }
        other => panic!("expected GenerationLimit, got {other:?}"),
    }
}

#[test]
fn symbol_cap_leaves_the_cache_intact() {
    let mut grammar = LsysGrammar::with_limits(GrowthLimits {
        max_generation: 64,
        max_symbols: 8,
    });
    grammar.load_str("F\nF->FF");

    // Generation 3 holds exactly 8 symbols, right at the cap.
    assert_eq!(grammar.generation(3).unwrap(), "FFFFFFFF");
    assert!(matches!(
        grammar.generation(4),
        Err(VerdureError::SymbolLimit {
            generation: 4,
            length: 16,
            limit: 8,
        })
    ));
    // The failed step must not damage what was already computed.
    assert_eq!(grammar.generation(3).unwrap(), "FFFFFFFF");
}

#[test]
fn grammars_load_from_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "F\nF->F[+F]F").unwrap();

    let mut grammar = LsysGrammar::new();
    grammar.load_path(file.path()).unwrap();

    assert_eq!(grammar.source(), "F\nF->F[+F]F");
    assert_eq!(grammar.generation(1).unwrap(), "F[+F]F");
}

#[test]
fn missing_grammar_file_reports_io_error() {
    let mut grammar = LsysGrammar::new();
    let result = grammar.load_path("/definitely/not/a/grammar.txt");
    assert!(matches!(result, Err(VerdureError::Io(_))));
}
