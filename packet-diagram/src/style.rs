use crate::theme::Theme;

/// Build the diagram's CSS in a single line.
pub fn stylesheet(theme: &Theme) -> String {
    let text = format!(
        "fill:{};font-family:{};font-size:{};",
        theme.text_color, theme.font_family, theme.text_size
    );
    let mut css = String::new();
    css.push_str(&format!(
        "text.x-bit,text.x-octet,text.placement{{{text}text-anchor:middle;}}"
    ));
    css.push_str(&format!("text.y-bit,text.y-octet{{{text}text-anchor:end;}}"));
    css.push_str(&format!(
        "text.title{{font-size:{};}}",
        theme.axis_title_size
    ));
    css.push_str(&format!(
        "line.x-bit,line.x-octet,line.y-bit,line.y-octet{{stroke:{};}}",
        theme.text_color
    ));
    css.push_str(&format!(
        "polygon.placement{{fill:{};stroke:{};}}",
        theme.background_color, theme.text_color
    ));
    css.push_str(&format!(
        "path.breakmark{{fill:none;stroke:{};}}",
        theme.text_color
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_css() {
        let css = stylesheet(&Theme::default());
        assert!(css.contains("text.y-bit,text.y-octet{fill:black;font-family:Sans Serif;font-size:16pt;text-anchor:end;}"));
        assert!(css.contains("text.title{font-size:8pt;}"));
        assert!(css.contains("polygon.placement{fill:white;stroke:black;}"));
        assert!(!css.contains('\n'));
    }

    #[test]
    fn title_rule_follows_axis_rules() {
        let css = stylesheet(&Theme::default());
        let axis = css.find("text.x-bit").unwrap();
        let title = css.find("text.title").unwrap();
        assert!(title > axis);
    }
}
