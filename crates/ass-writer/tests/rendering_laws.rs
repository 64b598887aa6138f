//! Property-based tests for rendering invariants
//!
//! Uses proptest to check that rendering is deterministic, that dialogue
//! lines never lose a column, that effects carry the expected parameter
//! count, and that omitted style fields disappear from both the `Format:`
//! and `Style:` lines together.

use ass_writer::{
    script::NamedField, Alignment, BorderStyle, Dialogue, Document, Effect, EventSection,
    ScriptInfo, Style, Timestamp, WrapStyle,
};
use proptest::prelude::*;

/// Text without commas or line breaks, tags allowed
fn arb_plain_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        "\\{\\\\[a-z0-9]+\\}[a-zA-Z ]{0,20}",
        Just(String::new()),
    ]
}

fn arb_effect() -> impl Strategy<Value = Effect> {
    prop_oneof![
        Just(Effect::Undefined),
        Just(Effect::Karaoke),
        (any::<i32>(), any::<i32>(), 0..100i32, proptest::option::of(0..50i32)).prop_map(
            |(y1, y2, delay, fade_away_height)| Effect::ScrollUp {
                y1,
                y2,
                delay,
                fade_away_height,
            }
        ),
        (any::<i32>(), any::<i32>(), 0..100i32, proptest::option::of(0..50i32)).prop_map(
            |(y1, y2, delay, fade_away_height)| Effect::ScrollDown {
                y1,
                y2,
                delay,
                fade_away_height,
            }
        ),
        (0..100i32, any::<bool>(), proptest::option::of(0..50i32)).prop_map(
            |(delay, left_to_right, fade_away_width)| Effect::Banner {
                delay,
                left_to_right,
                fade_away_width,
            }
        ),
    ]
}

fn arb_dialogue() -> impl Strategy<Value = Dialogue> {
    (
        -5..5i32,
        proptest::option::of(0..10_000_000u64),
        proptest::option::of(0..10_000_000u64),
        "[A-Za-z]{0,10}",
        "[A-Za-z ]{0,10}",
        (0..100i32, 0..100i32, 0..100i32),
        arb_effect(),
        arb_plain_text(),
    )
        .prop_map(|(layer, start, end, style, name, (l, r, v), effect, text)| {
            Dialogue::builder()
                .layer(layer)
                .start(start.map(Timestamp::from_millis))
                .end(end.map(Timestamp::from_millis))
                .style(style)
                .name(name)
                .margins(l, r, v)
                .effect(effect)
                .text(text)
                .build()
        })
}

/// Each flag decides whether one style field is cleared
fn arb_sparse_style() -> impl Strategy<Value = (Style, usize)> {
    proptest::collection::vec(any::<bool>(), 6).prop_map(|clear| {
        let mut builder = Style::builder();
        if clear[0] {
            builder = builder.name(None);
        }
        if clear[1] {
            builder = builder.fontsize(None);
        }
        if clear[2] {
            builder = builder.bold(None);
        }
        if clear[3] {
            builder = builder.angle(None);
        }
        if clear[4] {
            builder = builder.alignment(None);
        }
        if clear[5] {
            builder = builder.margin_v(None);
        }
        let cleared = clear.iter().filter(|&&c| c).count();
        (builder.build(), cleared)
    })
}

proptest! {
    #[test]
    fn dialogue_always_has_nine_separators(dialogue in arb_dialogue()) {
        let line = dialogue.to_ass_string();
        prop_assert_eq!(line.matches(',').count(), 9);
        prop_assert!(line.starts_with("Dialogue: "));
    }

    #[test]
    fn document_rendering_is_idempotent(dialogues in proptest::collection::vec(arb_dialogue(), 0..10)) {
        let doc = Document::new(
            ScriptInfo::default(),
            Style::default(),
            dialogues.into_iter().collect::<EventSection>(),
        );
        prop_assert_eq!(doc.to_ass_string(), doc.to_ass_string());
    }

    #[test]
    fn style_lists_stay_aligned((style, cleared) in arb_sparse_style()) {
        let text = style.to_ass_string();
        let mut lines = text.lines();
        prop_assert_eq!(lines.next(), Some("[V4+ Styles]"));

        let format = lines.next().unwrap().strip_prefix("Format: ").unwrap();
        let values = lines.next().unwrap().strip_prefix("Style: ").unwrap();

        let names = format.split(',').count();
        prop_assert_eq!(names, 23 - cleared);
        prop_assert_eq!(values.split(',').count(), names);
    }

    #[test]
    fn absent_field_renders_nothing(
        name in "[A-Za-z]{1,12}",
        comments in proptest::collection::vec("[a-z ]{0,20}", 0..4),
    ) {
        let comment_refs: Vec<&str> = comments.iter().map(String::as_str).collect();
        let field = NamedField::new::<i32>(&name, None, &comment_refs);
        prop_assert_eq!(field.render(), "");
    }

    #[test]
    fn commented_field_has_one_line_per_comment(
        value in "[A-Za-z0-9]{0,12}",
        comments in proptest::collection::vec("[a-z ]{0,20}", 1..4),
    ) {
        let comment_refs: Vec<&str> = comments.iter().map(String::as_str).collect();
        let block = NamedField::new("Title", Some(value.as_str()), &comment_refs).render();
        prop_assert_eq!(block.lines().count(), comments.len() + 1);
        prop_assert!(block.ends_with('\n'));
        let expected_tail = format!("Title: {value}\n");
        prop_assert!(block.ends_with(&expected_tail));
    }

    #[test]
    fn timestamps_render_two_digit_fields(millis in 0..400_000_000u64) {
        let text = Timestamp::from_millis(millis).to_string();
        let (clock, hundredths) = text.rsplit_once('.').unwrap();
        prop_assert_eq!(hundredths.len(), 2);
        let parts: Vec<&str> = clock.split(':').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert_eq!(parts[1].len(), 2);
        prop_assert_eq!(parts[2].len(), 2);

        let parsed: Timestamp = text.parse().unwrap();
        prop_assert_eq!(parsed.as_centiseconds(), millis / 10);
    }

    #[test]
    fn effect_parameter_count_follows_fade(effect in arb_effect()) {
        let text = effect.to_ass_string();
        let fields: Vec<&str> = text.split(';').collect();
        match effect {
            Effect::Undefined => prop_assert_eq!(text.as_str(), ""),
            Effect::Karaoke => prop_assert_eq!(text.as_str(), "Karaoke"),
            Effect::ScrollUp { fade_away_height, .. } => {
                prop_assert_eq!(fields[0], "Scroll up");
                prop_assert_eq!(fields.len() - 1, if fade_away_height.is_some() { 4 } else { 3 });
            }
            Effect::ScrollDown { fade_away_height, .. } => {
                prop_assert_eq!(fields[0], "Scroll down");
                prop_assert_eq!(fields.len() - 1, if fade_away_height.is_some() { 4 } else { 3 });
            }
            Effect::Banner { left_to_right, fade_away_width, .. } => {
                prop_assert_eq!(fields[0], "Banner");
                prop_assert_eq!(fields.len() - 1, if fade_away_width.is_some() { 3 } else { 2 });
                prop_assert_eq!(fields[2], if left_to_right { "1" } else { "0" });
            }
        }
    }

    #[test]
    fn numeric_codes_round_trip(code in any::<u8>()) {
        if let Ok(alignment) = Alignment::try_from(code) {
            prop_assert_eq!(alignment.code(), code);
        }
        if let Ok(border) = BorderStyle::try_from(code) {
            prop_assert_eq!(border.code(), code);
        }
        if let Ok(wrap) = WrapStyle::try_from(code) {
            prop_assert_eq!(wrap.code(), code);
        }
    }
}
