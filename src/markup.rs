//! HTML markup for the two output regions
//!
//! Pure functions: a result set goes in, an HTML fragment comes out. The list
//! region gets one row per country (flag + name); the info region gets a
//! single detailed card. Every interpolated value is escaped.

use crate::countries::Country;

/// Escape text for use inside element content or a quoted attribute
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Compact list markup: one `<li>` with flag and name per country
pub fn country_list_markup(countries: &[Country]) -> String {
    countries.iter().map(list_item).collect()
}

fn list_item(country: &Country) -> String {
    format!(
        r#"<li class="country-list__item"><img class="country-list__flag" src="{}" alt="{}" width="30" height="20"><p class="country-list__name">{}</p></li>"#,
        escape_html(country.flag_url()),
        escape_html(&country.flag_alt()),
        escape_html(country.display_name()),
    )
}

/// Detailed card markup: flag, name, capital, population and languages
pub fn country_info_markup(country: &Country) -> String {
    format!(
        concat!(
            r#"<div class="country-info__header">"#,
            r#"<img class="country-info__flag" src="{flag}" alt="{alt}" width="30" height="20">"#,
            r#"<h2 class="country-info__name">{name}</h2>"#,
            "</div>",
            r#"<p class="country-info__row"><span class="country-info__label">Capital:</span> {capital}</p>"#,
            r#"<p class="country-info__row"><span class="country-info__label">Population:</span> {population}</p>"#,
            r#"<p class="country-info__row"><span class="country-info__label">Languages:</span> {languages}</p>"#,
        ),
        flag = escape_html(country.flag_url()),
        alt = escape_html(&country.flag_alt()),
        name = escape_html(country.display_name()),
        capital = escape_html(&country.capitals()),
        population = country.population,
        languages = escape_html(&country.language_names()),
    )
}
