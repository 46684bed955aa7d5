//! Built-in country table.
//!
//! Codes are ISO 3166-1 alpha-2 (plus `XK` for Kosovo). Continent assignment
//! follows the two-letter region codes; a country spanning two continents is
//! listed under exactly one of them.

use super::Continent::{
    self, Africa, Antarctica, Asia, Europe, NorthAmerica, Oceania, SouthAmerica,
};

#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub continent: Continent,
}

const fn c(code: &'static str, name: &'static str, continent: Continent) -> Country {
    Country {
        code,
        name,
        continent,
    }
}

pub const COUNTRIES: &[Country] = &[
    c("AD", "Andorra", Europe),
    c("AE", "United Arab Emirates", Asia),
    c("AF", "Afghanistan", Asia),
    c("AG", "Antigua and Barbuda", NorthAmerica),
    c("AI", "Anguilla", NorthAmerica),
    c("AL", "Albania", Europe),
    c("AM", "Armenia", Asia),
    c("AO", "Angola", Africa),
    c("AQ", "Antarctica", Antarctica),
    c("AR", "Argentina", SouthAmerica),
    c("AS", "American Samoa", Oceania),
    c("AT", "Austria", Europe),
    c("AU", "Australia", Oceania),
    c("AW", "Aruba", NorthAmerica),
    c("AX", "Åland", Europe),
    c("AZ", "Azerbaijan", Asia),
    c("BA", "Bosnia and Herzegovina", Europe),
    c("BB", "Barbados", NorthAmerica),
    c("BD", "Bangladesh", Asia),
    c("BE", "Belgium", Europe),
    c("BF", "Burkina Faso", Africa),
    c("BG", "Bulgaria", Europe),
    c("BH", "Bahrain", Asia),
    c("BI", "Burundi", Africa),
    c("BJ", "Benin", Africa),
    c("BL", "Saint Barthélemy", NorthAmerica),
    c("BM", "Bermuda", NorthAmerica),
    c("BN", "Brunei", Asia),
    c("BO", "Bolivia", SouthAmerica),
    c("BQ", "Bonaire", NorthAmerica),
    c("BR", "Brazil", SouthAmerica),
    c("BS", "Bahamas", NorthAmerica),
    c("BT", "Bhutan", Asia),
    c("BV", "Bouvet Island", Antarctica),
    c("BW", "Botswana", Africa),
    c("BY", "Belarus", Europe),
    c("BZ", "Belize", NorthAmerica),
    c("CA", "Canada", NorthAmerica),
    c("CC", "Cocos (Keeling) Islands", Asia),
    c("CD", "Democratic Republic of the Congo", Africa),
    c("CF", "Central African Republic", Africa),
    c("CG", "Republic of the Congo", Africa),
    c("CH", "Switzerland", Europe),
    c("CI", "Ivory Coast", Africa),
    c("CK", "Cook Islands", Oceania),
    c("CL", "Chile", SouthAmerica),
    c("CM", "Cameroon", Africa),
    c("CN", "China", Asia),
    c("CO", "Colombia", SouthAmerica),
    c("CR", "Costa Rica", NorthAmerica),
    c("CU", "Cuba", NorthAmerica),
    c("CV", "Cape Verde", Africa),
    c("CW", "Curaçao", NorthAmerica),
    c("CX", "Christmas Island", Asia),
    c("CY", "Cyprus", Europe),
    c("CZ", "Czech Republic", Europe),
    c("DE", "Germany", Europe),
    c("DJ", "Djibouti", Africa),
    c("DK", "Denmark", Europe),
    c("DM", "Dominica", NorthAmerica),
    c("DO", "Dominican Republic", NorthAmerica),
    c("DZ", "Algeria", Africa),
    c("EC", "Ecuador", SouthAmerica),
    c("EE", "Estonia", Europe),
    c("EG", "Egypt", Africa),
    c("EH", "Western Sahara", Africa),
    c("ER", "Eritrea", Africa),
    c("ES", "Spain", Europe),
    c("ET", "Ethiopia", Africa),
    c("FI", "Finland", Europe),
    c("FJ", "Fiji", Oceania),
    c("FK", "Falkland Islands", SouthAmerica),
    c("FM", "Micronesia", Oceania),
    c("FO", "Faroe Islands", Europe),
    c("FR", "France", Europe),
    c("GA", "Gabon", Africa),
    c("GB", "United Kingdom", Europe),
    c("GD", "Grenada", NorthAmerica),
    c("GE", "Georgia", Asia),
    c("GF", "French Guiana", SouthAmerica),
    c("GG", "Guernsey", Europe),
    c("GH", "Ghana", Africa),
    c("GI", "Gibraltar", Europe),
    c("GL", "Greenland", NorthAmerica),
    c("GM", "Gambia", Africa),
    c("GN", "Guinea", Africa),
    c("GP", "Guadeloupe", NorthAmerica),
    c("GQ", "Equatorial Guinea", Africa),
    c("GR", "Greece", Europe),
    c("GS", "South Georgia and the South Sandwich Islands", Antarctica),
    c("GT", "Guatemala", NorthAmerica),
    c("GU", "Guam", Oceania),
    c("GW", "Guinea-Bissau", Africa),
    c("GY", "Guyana", SouthAmerica),
    c("HK", "Hong Kong", Asia),
    c("HM", "Heard Island and McDonald Islands", Antarctica),
    c("HN", "Honduras", NorthAmerica),
    c("HR", "Croatia", Europe),
    c("HT", "Haiti", NorthAmerica),
    c("HU", "Hungary", Europe),
    c("ID", "Indonesia", Asia),
    c("IE", "Ireland", Europe),
    c("IL", "Israel", Asia),
    c("IM", "Isle of Man", Europe),
    c("IN", "India", Asia),
    c("IO", "British Indian Ocean Territory", Asia),
    c("IQ", "Iraq", Asia),
    c("IR", "Iran", Asia),
    c("IS", "Iceland", Europe),
    c("IT", "Italy", Europe),
    c("JE", "Jersey", Europe),
    c("JM", "Jamaica", NorthAmerica),
    c("JO", "Jordan", Asia),
    c("JP", "Japan", Asia),
    c("KE", "Kenya", Africa),
    c("KG", "Kyrgyzstan", Asia),
    c("KH", "Cambodia", Asia),
    c("KI", "Kiribati", Oceania),
    c("KM", "Comoros", Africa),
    c("KN", "Saint Kitts and Nevis", NorthAmerica),
    c("KP", "North Korea", Asia),
    c("KR", "South Korea", Asia),
    c("KW", "Kuwait", Asia),
    c("KY", "Cayman Islands", NorthAmerica),
    c("KZ", "Kazakhstan", Asia),
    c("LA", "Laos", Asia),
    c("LB", "Lebanon", Asia),
    c("LC", "Saint Lucia", NorthAmerica),
    c("LI", "Liechtenstein", Europe),
    c("LK", "Sri Lanka", Asia),
    c("LR", "Liberia", Africa),
    c("LS", "Lesotho", Africa),
    c("LT", "Lithuania", Europe),
    c("LU", "Luxembourg", Europe),
    c("LV", "Latvia", Europe),
    c("LY", "Libya", Africa),
    c("MA", "Morocco", Africa),
    c("MC", "Monaco", Europe),
    c("MD", "Moldova", Europe),
    c("ME", "Montenegro", Europe),
    c("MF", "Saint Martin", NorthAmerica),
    c("MG", "Madagascar", Africa),
    c("MH", "Marshall Islands", Oceania),
    c("MK", "North Macedonia", Europe),
    c("ML", "Mali", Africa),
    c("MM", "Myanmar", Asia),
    c("MN", "Mongolia", Asia),
    c("MO", "Macao", Asia),
    c("MP", "Northern Mariana Islands", Oceania),
    c("MQ", "Martinique", NorthAmerica),
    c("MR", "Mauritania", Africa),
    c("MS", "Montserrat", NorthAmerica),
    c("MT", "Malta", Europe),
    c("MU", "Mauritius", Africa),
    c("MV", "Maldives", Asia),
    c("MW", "Malawi", Africa),
    c("MX", "Mexico", NorthAmerica),
    c("MY", "Malaysia", Asia),
    c("MZ", "Mozambique", Africa),
    c("NA", "Namibia", Africa),
    c("NC", "New Caledonia", Oceania),
    c("NE", "Niger", Africa),
    c("NF", "Norfolk Island", Oceania),
    c("NG", "Nigeria", Africa),
    c("NI", "Nicaragua", NorthAmerica),
    c("NL", "Netherlands", Europe),
    c("NO", "Norway", Europe),
    c("NP", "Nepal", Asia),
    c("NR", "Nauru", Oceania),
    c("NU", "Niue", Oceania),
    c("NZ", "New Zealand", Oceania),
    c("OM", "Oman", Asia),
    c("PA", "Panama", NorthAmerica),
    c("PE", "Peru", SouthAmerica),
    c("PF", "French Polynesia", Oceania),
    c("PG", "Papua New Guinea", Oceania),
    c("PH", "Philippines", Asia),
    c("PK", "Pakistan", Asia),
    c("PL", "Poland", Europe),
    c("PM", "Saint Pierre and Miquelon", NorthAmerica),
    c("PN", "Pitcairn Islands", Oceania),
    c("PR", "Puerto Rico", NorthAmerica),
    c("PS", "Palestine", Asia),
    c("PT", "Portugal", Europe),
    c("PW", "Palau", Oceania),
    c("PY", "Paraguay", SouthAmerica),
    c("QA", "Qatar", Asia),
    c("RE", "Réunion", Africa),
    c("RO", "Romania", Europe),
    c("RS", "Serbia", Europe),
    c("RU", "Russia", Europe),
    c("RW", "Rwanda", Africa),
    c("SA", "Saudi Arabia", Asia),
    c("SB", "Solomon Islands", Oceania),
    c("SC", "Seychelles", Africa),
    c("SD", "Sudan", Africa),
    c("SE", "Sweden", Europe),
    c("SG", "Singapore", Asia),
    c("SH", "Saint Helena", Africa),
    c("SI", "Slovenia", Europe),
    c("SJ", "Svalbard and Jan Mayen", Europe),
    c("SK", "Slovakia", Europe),
    c("SL", "Sierra Leone", Africa),
    c("SM", "San Marino", Europe),
    c("SN", "Senegal", Africa),
    c("SO", "Somalia", Africa),
    c("SR", "Suriname", SouthAmerica),
    c("SS", "South Sudan", Africa),
    c("ST", "São Tomé and Príncipe", Africa),
    c("SV", "El Salvador", NorthAmerica),
    c("SX", "Sint Maarten", NorthAmerica),
    c("SY", "Syria", Asia),
    c("SZ", "Eswatini", Africa),
    c("TC", "Turks and Caicos Islands", NorthAmerica),
    c("TD", "Chad", Africa),
    c("TF", "French Southern Territories", Antarctica),
    c("TG", "Togo", Africa),
    c("TH", "Thailand", Asia),
    c("TJ", "Tajikistan", Asia),
    c("TK", "Tokelau", Oceania),
    c("TL", "East Timor", Oceania),
    c("TM", "Turkmenistan", Asia),
    c("TN", "Tunisia", Africa),
    c("TO", "Tonga", Oceania),
    c("TR", "Turkey", Asia),
    c("TT", "Trinidad and Tobago", NorthAmerica),
    c("TV", "Tuvalu", Oceania),
    c("TW", "Taiwan", Asia),
    c("TZ", "Tanzania", Africa),
    c("UA", "Ukraine", Europe),
    c("UG", "Uganda", Africa),
    c("UM", "U.S. Minor Outlying Islands", Oceania),
    c("US", "United States", NorthAmerica),
    c("UY", "Uruguay", SouthAmerica),
    c("UZ", "Uzbekistan", Asia),
    c("VA", "Vatican City", Europe),
    c("VC", "Saint Vincent and the Grenadines", NorthAmerica),
    c("VE", "Venezuela", SouthAmerica),
    c("VG", "British Virgin Islands", NorthAmerica),
    c("VI", "U.S. Virgin Islands", NorthAmerica),
    c("VN", "Vietnam", Asia),
    c("VU", "Vanuatu", Oceania),
    c("WF", "Wallis and Futuna", Oceania),
    c("WS", "Samoa", Oceania),
    c("XK", "Kosovo", Europe),
    c("YE", "Yemen", Asia),
    c("YT", "Mayotte", Africa),
    c("ZA", "South Africa", Africa),
    c("ZM", "Zambia", Africa),
    c("ZW", "Zimbabwe", Africa),
];

/// Names seen in real listings that differ from the short names above.
/// Keys are lower-case.
pub const NAME_ALIASES: &[(&str, &str)] = &[
    ("usa", "US"),
    ("u.s.a.", "US"),
    ("u.s.", "US"),
    ("united states of america", "US"),
    ("america", "US"),
    ("uk", "GB"),
    ("u.k.", "GB"),
    ("great britain", "GB"),
    ("britain", "GB"),
    ("england", "GB"),
    ("scotland", "GB"),
    ("wales", "GB"),
    ("northern ireland", "GB"),
    ("united kingdom of great britain and northern ireland", "GB"),
    ("korea", "KR"),
    ("republic of korea", "KR"),
    ("korea, republic of", "KR"),
    ("democratic people's republic of korea", "KP"),
    ("korea, democratic people's republic of", "KP"),
    ("russian federation", "RU"),
    ("czechia", "CZ"),
    ("holland", "NL"),
    ("the netherlands", "NL"),
    ("netherlands, kingdom of the", "NL"),
    ("viet nam", "VN"),
    ("iran, islamic republic of", "IR"),
    ("türkiye", "TR"),
    ("turkiye", "TR"),
    ("côte d'ivoire", "CI"),
    ("cote d'ivoire", "CI"),
    ("macedonia", "MK"),
    ("swaziland", "SZ"),
    ("burma", "MM"),
    ("cabo verde", "CV"),
    ("taiwan, province of china", "TW"),
    ("hong kong sar", "HK"),
    ("macau", "MO"),
    ("uae", "AE"),
    ("bolivia, plurinational state of", "BO"),
    ("venezuela, bolivarian republic of", "VE"),
    ("tanzania, united republic of", "TZ"),
    ("moldova, republic of", "MD"),
    ("lao people's democratic republic", "LA"),
    ("syrian arab republic", "SY"),
    ("brunei darussalam", "BN"),
    ("vatican", "VA"),
    ("holy see", "VA"),
    ("timor-leste", "TL"),
    ("palestine, state of", "PS"),
    ("micronesia, federated states of", "FM"),
    ("congo", "CG"),
    ("dr congo", "CD"),
    ("congo, democratic republic of the", "CD"),
    ("curacao", "CW"),
    ("reunion", "RE"),
    ("aland islands", "AX"),
    ("åland islands", "AX"),
    ("sao tome and principe", "ST"),
    ("saint barthelemy", "BL"),
];
