//! End-to-end rendering of complete scripts
//!
//! Compares whole documents against the exact text a subtitle renderer
//! expects, byte for byte.

use ass_writer::{
    Alignment, Collisions, Dialogue, Document, Effect, EventSection, ScriptInfo, Style, Timestamp,
    WrapStyle,
};
use core::time::Duration;
use pretty_assertions::assert_eq;

const EXPECTED_FIVE_ITEMS: &str = r#"[Script Info]
; This is the SSA script format version eg. "V4.00".
; It is used by SSA to give a warning if you are using a version of SSA older than the version that created the script.
; ASS version is “V4.00+”.
ScriptType: V4.00+
;
; Defines the default wrapping style.
; 0: smart wrapping, lines are evenly broken
; 1: end-of-line word wrapping, only \N breaks
; 2: no word wrapping, \n \N both breaks
; 3: same as 0, but lower line gets wider.
WrapStyle: 0


[V4+ Styles]
Format: Name,Fontname,Fontsize,PrimaryColour,SecondaryColour,OutlineColour,BackColour,Bold,Italic,Underline,StrikeOut,ScaleX,ScaleY,Spacing,Angle,BorderStyle,Outline,Shadow,Alignment,MarginL,MarginR,MarginV,Encoding
Style: Default,Arial,12,&H000000FF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0.0,1,2,2,3,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:00.20,Default,,0,0,0,,test-item-0\N第(0)个条目的一行文字\N第(0)个条目的又一行文字
Dialogue: 0,0:00:00.20,0:00:00.40,Default,,0,0,0,,test-item-1\N第(1)个条目的一行文字\N第(1)个条目的又一行文字
Dialogue: 0,0:00:00.40,0:00:00.60,Default,,0,0,0,,test-item-2\N第(2)个条目的一行文字\N第(2)个条目的又一行文字
Dialogue: 0,0:00:00.60,0:00:00.80,Default,,0,0,0,,test-item-3\N第(3)个条目的一行文字\N第(3)个条目的又一行文字
Dialogue: 0,0:00:00.80,0:00:01.00,Default,,0,0,0,,test-item-4\N第(4)个条目的一行文字\N第(4)个条目的又一行文字

"#;

fn five_item_document() -> Document {
    let style = Style::builder()
        .fontsize(12)
        .primary_colour("&H000000FF")
        .alignment(Alignment::RightBottom)
        .build();

    let step = Duration::from_millis(200);
    let events: EventSection = (0..5u64)
        .map(|i| {
            Dialogue::builder()
                .span(Timestamp::from_millis(i * 200), step)
                .text(format!(
                    "test-item-{i}\\N第({i})个条目的一行文字\\N第({i})个条目的又一行文字"
                ))
                .build()
        })
        .collect();

    Document::new(ScriptInfo::default(), style, events)
}

#[test]
fn five_item_document_renders_exactly() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(five_item_document().to_ass_string(), EXPECTED_FIVE_ITEMS);
}

#[test]
fn display_matches_to_ass_string() {
    let doc = five_item_document();
    assert_eq!(doc.to_string(), EXPECTED_FIVE_ITEMS);

    let mut sink = String::new();
    doc.write_to(&mut sink).unwrap();
    assert_eq!(sink, EXPECTED_FIVE_ITEMS);
}

#[test]
fn empty_events_render_header_then_trailing_newline() {
    let doc = Document::new(ScriptInfo::default(), Style::default(), EventSection::default());
    let text = doc.to_ass_string();

    assert!(text.ends_with(
        "\n\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\n"
    ));
    assert!(!text.contains("Dialogue:"));
}

#[test]
fn fully_populated_script_info() {
    let info = ScriptInfo::builder()
        .title("Demo")
        .original_script("Author")
        .script_type("V4.00+")
        .collisions(Collisions::Normal)
        .play_res_x(1920)
        .play_res_y(1080)
        .play_depth("0")
        .timer(100.0_f32)
        .wrap_style(WrapStyle::NoWrap)
        .build();
    let text = info.to_ass_string();

    let title_at = text.find("Title: Demo\n").unwrap();
    let author_at = text.find("OriginalScript: Author\n").unwrap();
    let collisions_at = text.find("Collisions: Normal").unwrap();
    let res_x_at = text.find("PlayResX: 1920").unwrap();
    let timer_at = text.find("Timer: 100").unwrap();
    let wrap_at = text.find("WrapStyle: 2\n").unwrap();

    assert!(title_at < author_at);
    assert!(author_at < collisions_at);
    assert!(collisions_at < res_x_at);
    assert!(res_x_at < timer_at);
    assert!(timer_at < wrap_at);
    assert!(text.ends_with("WrapStyle: 2\n\n"));
}

#[test]
fn effect_lands_in_ninth_slot() {
    let events: EventSection = [Dialogue::builder()
        .start(Timestamp::ZERO)
        .end(Timestamp::from_millis(5_000))
        .effect(Effect::ScrollUp {
            y1: 10,
            y2: 300,
            delay: 20,
            fade_away_height: Some(5),
        })
        .text("Credits")
        .build()]
    .into_iter()
    .collect();
    let doc = Document::new(ScriptInfo::default(), Style::default(), events);

    assert!(doc
        .to_ass_string()
        .contains("Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,Scroll up;10;300;20;5,Credits\n"));
}

#[test]
fn untimed_dialogue_boundary() {
    let events = EventSection::new(vec![Dialogue::default()]);
    assert_eq!(
        events.to_ass_string(),
        "[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\
         Dialogue: 0,,,Default,,0,0,0,,\n"
    );
}
