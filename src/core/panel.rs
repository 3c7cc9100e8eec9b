//! Markup for the details panel and tech grid that follow the selection.

use super::item::{CarouselItem, SkillLevel};

/// Accent color for a skill level; unknown levels render gray.
pub fn level_color(level: Option<SkillLevel>) -> &'static str {
    match level {
        Some(SkillLevel::Expert) => "#10b981",       // green
        Some(SkillLevel::Advanced) => "#3b82f6",     // blue
        Some(SkillLevel::Intermediate) => "#f59e0b", // amber
        Some(SkillLevel::Beginner) => "#ef4444",     // red
        None => "#6b7280",
    }
}

/// Width of the proficiency bar, in percent.
pub fn proficiency_percent(level: Option<SkillLevel>) -> u8 {
    match level {
        Some(SkillLevel::Expert) => 95,
        Some(SkillLevel::Advanced) => 80,
        Some(SkillLevel::Intermediate) => 65,
        Some(SkillLevel::Beginner) | None => 40,
    }
}

/// Icon name for a category, matched case-insensitively.
pub fn category_icon(category: &str) -> &'static str {
    match category.to_ascii_lowercase().as_str() {
        "frontend" => "globe",
        "backend" => "cpu",
        "database" => "database",
        "cloud" => "cloud",
        "devops" | "tools" => "wrench",
        _ => "code",
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Selected-tech card.
pub fn details_html(item: &CarouselItem) -> String {
    let color = level_color(item.level);
    let level = item.level.map(SkillLevel::as_str).unwrap_or("");
    format!(
        "<div class='selected-tech-card'>\
           <div class='tech-card-header'>\
             <div class='tech-icon-wrapper'><span class='icon icon-{icon}'></span></div>\
             <div class='tech-title-group'>\
               <h3 class='tech-title'>{title}</h3>\
               <div class='tech-meta'>\
                 <span class='tech-category'>{category}</span>\
                 <span class='tech-level' style='color: {color}'>{level}</span>\
               </div>\
             </div>\
           </div>\
           <p class='tech-description'>{description}</p>\
           <div class='tech-stats'>\
             <div class='tech-stat'><span class='stat-label'>Experience</span>\
               <span class='stat-value'>{years}+ years</span></div>\
             <div class='tech-stat'><span class='stat-label'>Proficiency</span>\
               <div class='proficiency-bar'>\
                 <div class='proficiency-fill' style='width: {pct}%; background-color: {color}'></div>\
               </div>\
             </div>\
           </div>\
         </div>",
        icon = category_icon(&item.category),
        title = escape_html(item.title_or_empty()),
        category = escape_html(&item.category),
        color = color,
        level = level,
        description = escape_html(&item.description),
        years = item.years_of_experience,
        pct = proficiency_percent(item.level),
    )
}

/// One clickable grid tile; `active` marks the selected item.
pub fn grid_tile_html(index: usize, item: &CarouselItem, active: bool) -> String {
    format!(
        "<div class='tech-grid-item{active}' data-index='{index}'>\
           <div class='grid-item-icon'><span class='icon icon-{icon}'></span></div>\
           <span class='grid-item-title'>{title}</span>\
           <div class='grid-item-level' style='background-color: {color}'></div>\
         </div>",
        active = if active { " active" } else { "" },
        index = index,
        icon = category_icon(&item.category),
        title = escape_html(item.title_or_empty()),
        color = level_color(item.level),
    )
}
