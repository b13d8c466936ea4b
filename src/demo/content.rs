//! Panel content shown for each interaction zone.

use super::zones::ZoneId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelContent {
    pub title: &'static str,
    /// Trusted static markup.
    pub html: &'static str,
}

pub fn panel_content(zone: ZoneId) -> PanelContent {
    match zone {
        ZoneId::About => PanelContent {
            title: "About Mohammed Saqhib",
            html: "<p>I am an aspiring Data Science and Analytics Professional with a strong \
                   foundation in statistical analysis, machine learning, and data visualization. \
                   Based in Bengaluru, India, I combine technical expertise with analytical \
                   thinking to solve complex problems through data-driven solutions.</p>",
        },
        ZoneId::Skills => PanelContent {
            title: "Technical Skills & Expertise",
            html: "<p>My technical toolkit spans across various domains of data science and \
                   analytics:</p><ul>\
                   <li>Programming: Python, R, SQL, JavaScript</li>\
                   <li>Data Viz: Power BI, Tableau, Matplotlib, Seaborn</li>\
                   <li>ML/AI: Scikit-learn, TensorFlow, Keras, PyTorch</li>\
                   <li>Cloud & Tools: AWS, Azure, Git, Docker</li></ul>",
        },
        ZoneId::Projects => PanelContent {
            title: "Featured Projects",
            html: "<p>Here are some of my key projects:</p><ul>\
                   <li><strong>Advanced Stock Prediction Dashboard:</strong> ML-powered stock \
                   analysis platform.</li>\
                   <li><strong>Fraud Detection System:</strong> Real-time fraud detection using \
                   ML.</li>\
                   <li><strong>Formula 1 Data Hub:</strong> Comprehensive F1 data analysis and \
                   visualization platform.</li></ul>",
        },
        ZoneId::Contact => PanelContent {
            title: "Let's Connect & Collaborate",
            html: "<p>Ready to discuss opportunities or collaborate on exciting projects? I'd \
                   love to hear from you! Find me on LinkedIn or check out my GitHub.</p>",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_zone_has_distinct_content() {
        let titles: Vec<&str> = ZoneId::ALL
            .into_iter()
            .map(|zone| panel_content(zone).title)
            .collect();
        for (i, title) in titles.iter().enumerate() {
            assert!(!title.is_empty());
            assert!(!titles[i + 1..].contains(title));
        }
    }

    #[test]
    fn line_continuations_keep_words_apart() {
        let skills = panel_content(ZoneId::Skills).html;
        assert!(skills.contains("data science and analytics"));
        assert!(!skills.contains("  "));
    }
}
