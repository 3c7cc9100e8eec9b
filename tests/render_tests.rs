// Host-side tests for the presentation strings handed to the DOM.

use portfolio_carousel::core::data::tech_items;
use portfolio_carousel::core::geometry::{position, visual};
use portfolio_carousel::core::panel::{
    category_icon, details_html, escape_html, grid_tile_html, level_color, proficiency_percent,
};
use portfolio_carousel::core::render::{
    aria_label, container_class, image_alt, item_style, transition_css,
};
use portfolio_carousel::core::{Axis, CarouselItem, SkillLevel};

#[test]
fn front_item_style() {
    let p = position(0, 0, 4, Axis::Horizontal, 250.0);
    let v = visual(&p, 250.0, true);
    let style = item_style(&p, &v, Axis::Horizontal, 0.0, true, false);
    assert_eq!(
        style.transform,
        "translate3d(0.00px, 0.00px, 250.00px) rotateY(0.00deg) scale(1.120)"
    );
    assert_eq!(style.class(), "carousel-item selected");
    assert_eq!(
        style.css(),
        "transform: translate3d(0.00px, 0.00px, 250.00px) rotateY(0.00deg) scale(1.120); \
         opacity: 1.000; z-index: 100; transition: none;"
    );
}

#[test]
fn vertical_items_rotate_about_x() {
    let p = position(0, 0, 3, Axis::Vertical, 200.0);
    let v = visual(&p, 200.0, true);
    let style = item_style(&p, &v, Axis::Vertical, 0.0, true, true);
    assert!(style.transform.starts_with("translate3d(0.00px, 0.00px, 200.00px) rotateX("));
    assert_eq!(style.transition.as_deref(), Some("all 500ms ease"));
}

#[test]
fn rotation_is_written_unfolded() {
    let p = position(2, 0, 4, Axis::Horizontal, 250.0);
    let v = visual(&p, 250.0, false);
    let style = item_style(&p, &v, Axis::Horizontal, -450.0, false, false);
    assert!(style
        .transform
        .starts_with("translate3d(0.00px, 0.00px, -250.00px) rotateY(-450.00deg)"));
    assert_eq!(style.class(), "carousel-item");
}

#[test]
fn transition_matches_lock_window() {
    assert_eq!(transition_css(), "all 500ms ease");
}

#[test]
fn labels_number_items_from_one() {
    let items = tech_items();
    assert_eq!(aria_label(3, &items[3]), "Item 4: Python");
    let mut untitled = CarouselItem::new("x", "");
    assert_eq!(image_alt(1, &untitled), "Item 2");
    untitled.title = None;
    assert_eq!(aria_label(0, &untitled), "Item 1: ");
    assert_eq!(image_alt(0, &items[0]), "React");
}

#[test]
fn container_class_includes_axis() {
    assert_eq!(container_class(Axis::Horizontal, ""), "carousel-container horizontal");
    assert_eq!(
        container_class(Axis::Vertical, " hero "),
        "carousel-container hero vertical"
    );
}

#[test]
fn html_is_escaped() {
    assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
}

#[test]
fn level_styling() {
    assert_eq!(level_color(Some(SkillLevel::Expert)), "#10b981");
    assert_eq!(level_color(None), "#6b7280");
    assert_eq!(proficiency_percent(Some(SkillLevel::Expert)), 95);
    assert_eq!(proficiency_percent(Some(SkillLevel::Intermediate)), 65);
    assert_eq!(category_icon("BACKEND"), "cpu");
    assert_eq!(category_icon("Language"), "code");
}

#[test]
fn details_card_shows_selected_item() {
    let items = tech_items();
    let html = details_html(&items[0]);
    assert!(html.contains("selected-tech-card"));
    assert!(html.contains("<h3 class='tech-title'>React</h3>"));
    assert!(html.contains("4+ years"));
    assert!(html.contains("width: 95%"));
}

#[test]
fn grid_tile_marks_active_item() {
    let items = tech_items();
    let active = grid_tile_html(2, &items[2], true);
    assert!(active.starts_with("<div class='tech-grid-item active' data-index='2'>"));
    assert!(active.contains("Node.js"));
    let idle = grid_tile_html(0, &items[0], false);
    assert!(idle.starts_with("<div class='tech-grid-item' data-index='0'>"));
}
