//! The content-fixed baseline stylesheet: reset rules plus the four
//! animation keyframes. Consumers assert exact substrings of this
//! output, so it must stay byte-stable across calls and releases.

const CRITICAL_CSS: &str = "\
*, *::before, *::after { box-sizing: border-box; border-width: 0; border-style: solid; }
* { margin: 0; }
html { line-height: 1.5; -webkit-text-size-adjust: 100%; }
body { line-height: inherit; font-family: ui-sans-serif, system-ui, -apple-system, sans-serif; }
h1, h2, h3, h4, h5, h6 { font-size: inherit; font-weight: inherit; }
a { color: inherit; text-decoration: inherit; }
img, svg, video, canvas { display: block; max-width: 100%; height: auto; }
button, input, optgroup, select, textarea { font: inherit; color: inherit; margin: 0; padding: 0; }
button, [role=\"button\"] { background-color: transparent; background-image: none; cursor: pointer; }
ol, ul { list-style: none; margin: 0; padding: 0; }
@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }
@keyframes bounce { 0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); } 50% { transform: translateY(0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); } }
";

/// The fixed reset/keyframe stylesheet, independent of any class input.
pub fn critical_css() -> &'static str {
    CRITICAL_CSS
}
