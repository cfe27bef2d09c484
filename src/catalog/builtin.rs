//! The built-in component catalog: text, button, divider and image blocks

/// Built-in catalog source, in the same TOML format accepted by
/// [`Catalog::from_file`](super::Catalog::from_file)
pub const BUILTIN_CATALOG: &str = r##"
[[components]]
id = "text"
name = "Text"
description = "A text block with configurable content and style."
template = '<p style="color: {{color}}; font-size: {{fontSize}}px; text-align: {{align}};">{{text}}</p>'

[components.defaults]
text = "Sample text"
align = "left"
color = "#111111"
fontSize = 16

[[components.settings]]
key = "text"
label = "Text"
type = "text"
default = "Sample text"

[[components.settings]]
key = "align"
label = "Alignment"
type = "select"
default = "left"
options = [
    { label = "Left", value = "left" },
    { label = "Center", value = "center" },
    { label = "Right", value = "right" },
]

[[components.settings]]
key = "color"
label = "Text Color"
type = "color"
default = "#111111"

[[components.settings]]
key = "fontSize"
label = "Font Size"
type = "number"
default = 16

[[components]]
id = "button"
name = "Button"
description = "A call-to-action button linking to a URL."
template = '<p><a href="{{url}}" style="display:inline-block;background: {{backgroundColor}};color: {{textColor}};padding: 12px 20px;border-radius: 4px;text-decoration: none;">{{label}}</a></p>'

[components.defaults]
label = "Click me"
url = "https://example.com"
backgroundColor = "#2563eb"
textColor = "#ffffff"
openInNewTab = false

[[components.settings]]
key = "label"
label = "Label"
type = "text"
default = "Click me"

[[components.settings]]
key = "url"
label = "URL"
type = "url"
default = "https://example.com"

[[components.settings]]
key = "backgroundColor"
label = "Background"
type = "color"
default = "#2563eb"

[[components.settings]]
key = "textColor"
label = "Text Color"
type = "color"
default = "#ffffff"

[[components.settings]]
key = "openInNewTab"
label = "Open In New Tab"
type = "boolean"
default = false

[[components]]
id = "divider"
name = "Divider"
description = "A horizontal line used to separate sections."
template = '<hr style="border:0;border-top: {{thickness}}px solid {{color}};"/>'

[components.defaults]
thickness = 1
color = "#e5e7eb"

[[components.settings]]
key = "thickness"
label = "Thickness"
type = "number"
default = 1

[[components.settings]]
key = "color"
label = "Color"
type = "color"
default = "#e5e7eb"

[[components]]
id = "image"
name = "Image"
description = "An image block with URL and alt text."
template = '<img src="{{url}}" alt="{{alt}}" style="max-width:100%;display:block;"/>'

[components.defaults]
url = "https://via.placeholder.com/600x200"
alt = "Image"

[[components.settings]]
key = "url"
label = "Image URL"
type = "url"
default = "https://via.placeholder.com/600x200"

[[components.settings]]
key = "alt"
label = "Alt text"
type = "text"
default = "Image"
"##;
