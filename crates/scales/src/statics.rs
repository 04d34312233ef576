//! The closed table of static utility tokens.
//!
//! Entries here are looked up by exact string equality, never parsed;
//! every value is a complete declaration string. The max-width scale
//! and the text-alignment keyword set also live here because they are
//! consumed the same way.

use phf::phf_map;

static STATIC_RULES: phf::Map<&'static str, &'static str> = phf_map! {
    // Display
    "block" => "display: block",
    "inline-block" => "display: inline-block",
    "inline" => "display: inline",
    "flex" => "display: flex",
    "inline-flex" => "display: inline-flex",
    "grid" => "display: grid",
    "inline-grid" => "display: inline-grid",
    "hidden" => "display: none",

    // Flexbox
    "flex-row" => "flex-direction: row",
    "flex-row-reverse" => "flex-direction: row-reverse",
    "flex-col" => "flex-direction: column",
    "flex-col-reverse" => "flex-direction: column-reverse",
    "flex-wrap" => "flex-wrap: wrap",
    "flex-wrap-reverse" => "flex-wrap: wrap-reverse",
    "flex-nowrap" => "flex-wrap: nowrap",
    "flex-1" => "flex: 1 1 0%",
    "flex-auto" => "flex: 1 1 auto",
    "flex-initial" => "flex: 0 1 auto",
    "flex-none" => "flex: none",
    "grow" => "flex-grow: 1",
    "grow-0" => "flex-grow: 0",
    "shrink" => "flex-shrink: 1",
    "shrink-0" => "flex-shrink: 0",
    "items-start" => "align-items: flex-start",
    "items-end" => "align-items: flex-end",
    "items-center" => "align-items: center",
    "items-baseline" => "align-items: baseline",
    "items-stretch" => "align-items: stretch",
    "justify-start" => "justify-content: flex-start",
    "justify-end" => "justify-content: flex-end",
    "justify-center" => "justify-content: center",
    "justify-between" => "justify-content: space-between",
    "justify-around" => "justify-content: space-around",
    "justify-evenly" => "justify-content: space-evenly",
    "self-auto" => "align-self: auto",
    "self-start" => "align-self: flex-start",
    "self-end" => "align-self: flex-end",
    "self-center" => "align-self: center",
    "self-stretch" => "align-self: stretch",
    "content-start" => "align-content: flex-start",
    "content-end" => "align-content: flex-end",
    "content-center" => "align-content: center",
    "content-between" => "align-content: space-between",

    // Gap
    "gap-0" => "gap: 0px",
    "gap-1" => "gap: 0.25rem",
    "gap-2" => "gap: 0.5rem",
    "gap-3" => "gap: 0.75rem",
    "gap-4" => "gap: 1rem",
    "gap-5" => "gap: 1.25rem",
    "gap-6" => "gap: 1.5rem",
    "gap-8" => "gap: 2rem",
    "gap-10" => "gap: 2.5rem",
    "gap-12" => "gap: 3rem",
    "gap-16" => "gap: 4rem",
    "gap-x-0" => "column-gap: 0px",
    "gap-x-1" => "column-gap: 0.25rem",
    "gap-x-2" => "column-gap: 0.5rem",
    "gap-x-3" => "column-gap: 0.75rem",
    "gap-x-4" => "column-gap: 1rem",
    "gap-x-6" => "column-gap: 1.5rem",
    "gap-x-8" => "column-gap: 2rem",
    "gap-y-0" => "row-gap: 0px",
    "gap-y-1" => "row-gap: 0.25rem",
    "gap-y-2" => "row-gap: 0.5rem",
    "gap-y-3" => "row-gap: 0.75rem",
    "gap-y-4" => "row-gap: 1rem",
    "gap-y-6" => "row-gap: 1.5rem",
    "gap-y-8" => "row-gap: 2rem",

    // Grid
    "grid-cols-1" => "grid-template-columns: repeat(1, minmax(0, 1fr))",
    "grid-cols-2" => "grid-template-columns: repeat(2, minmax(0, 1fr))",
    "grid-cols-3" => "grid-template-columns: repeat(3, minmax(0, 1fr))",
    "grid-cols-4" => "grid-template-columns: repeat(4, minmax(0, 1fr))",
    "grid-cols-5" => "grid-template-columns: repeat(5, minmax(0, 1fr))",
    "grid-cols-6" => "grid-template-columns: repeat(6, minmax(0, 1fr))",
    "grid-cols-12" => "grid-template-columns: repeat(12, minmax(0, 1fr))",
    "grid-cols-none" => "grid-template-columns: none",
    "grid-rows-1" => "grid-template-rows: repeat(1, minmax(0, 1fr))",
    "grid-rows-2" => "grid-template-rows: repeat(2, minmax(0, 1fr))",
    "grid-rows-3" => "grid-template-rows: repeat(3, minmax(0, 1fr))",
    "grid-rows-4" => "grid-template-rows: repeat(4, minmax(0, 1fr))",
    "col-span-1" => "grid-column: span 1 / span 1",
    "col-span-2" => "grid-column: span 2 / span 2",
    "col-span-3" => "grid-column: span 3 / span 3",
    "col-span-4" => "grid-column: span 4 / span 4",
    "col-span-6" => "grid-column: span 6 / span 6",
    "col-span-full" => "grid-column: 1 / -1",
    "row-span-1" => "grid-row: span 1 / span 1",
    "row-span-2" => "grid-row: span 2 / span 2",
    "row-span-3" => "grid-row: span 3 / span 3",

    // Position
    "static" => "position: static",
    "fixed" => "position: fixed",
    "absolute" => "position: absolute",
    "relative" => "position: relative",
    "sticky" => "position: sticky",
    "inset-0" => "inset: 0px",
    "top-0" => "top: 0px",
    "right-0" => "right: 0px",
    "bottom-0" => "bottom: 0px",
    "left-0" => "left: 0px",
    "z-0" => "z-index: 0",
    "z-10" => "z-index: 10",
    "z-20" => "z-index: 20",
    "z-30" => "z-index: 30",
    "z-40" => "z-index: 40",
    "z-50" => "z-index: 50",
    "z-auto" => "z-index: auto",

    // Overflow
    "overflow-auto" => "overflow: auto",
    "overflow-hidden" => "overflow: hidden",
    "overflow-visible" => "overflow: visible",
    "overflow-scroll" => "overflow: scroll",
    "overflow-x-auto" => "overflow-x: auto",
    "overflow-x-hidden" => "overflow-x: hidden",
    "overflow-x-scroll" => "overflow-x: scroll",
    "overflow-y-auto" => "overflow-y: auto",
    "overflow-y-hidden" => "overflow-y: hidden",
    "overflow-y-scroll" => "overflow-y: scroll",

    // Typography
    "font-sans" => "font-family: ui-sans-serif, system-ui, -apple-system, sans-serif",
    "font-serif" => "font-family: ui-serif, Georgia, Cambria, serif",
    "font-mono" => "font-family: ui-monospace, SFMono-Regular, Menlo, monospace",
    "font-thin" => "font-weight: 100",
    "font-extralight" => "font-weight: 200",
    "font-light" => "font-weight: 300",
    "font-normal" => "font-weight: 400",
    "font-medium" => "font-weight: 500",
    "font-semibold" => "font-weight: 600",
    "font-bold" => "font-weight: 700",
    "font-extrabold" => "font-weight: 800",
    "font-black" => "font-weight: 900",
    "italic" => "font-style: italic",
    "not-italic" => "font-style: normal",
    "underline" => "text-decoration: underline",
    "line-through" => "text-decoration: line-through",
    "no-underline" => "text-decoration: none",
    "uppercase" => "text-transform: uppercase",
    "lowercase" => "text-transform: lowercase",
    "capitalize" => "text-transform: capitalize",
    "normal-case" => "text-transform: none",
    "text-left" => "text-align: left",
    "text-center" => "text-align: center",
    "text-right" => "text-align: right",
    "text-justify" => "text-align: justify",
    "leading-none" => "line-height: 1",
    "leading-tight" => "line-height: 1.25",
    "leading-snug" => "line-height: 1.375",
    "leading-normal" => "line-height: 1.5",
    "leading-relaxed" => "line-height: 1.625",
    "leading-loose" => "line-height: 2",
    "tracking-tighter" => "letter-spacing: -0.05em",
    "tracking-tight" => "letter-spacing: -0.025em",
    "tracking-normal" => "letter-spacing: 0em",
    "tracking-wide" => "letter-spacing: 0.025em",
    "tracking-wider" => "letter-spacing: 0.05em",
    "tracking-widest" => "letter-spacing: 0.1em",
    "whitespace-normal" => "white-space: normal",
    "whitespace-nowrap" => "white-space: nowrap",
    "whitespace-pre" => "white-space: pre",
    "whitespace-pre-wrap" => "white-space: pre-wrap",
    "break-words" => "overflow-wrap: break-word",
    "break-all" => "word-break: break-all",
    "truncate" => "overflow: hidden; text-overflow: ellipsis; white-space: nowrap",
    "antialiased" => "-webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale",

    // Borders
    "border" => "border-width: 1px",
    "border-0" => "border-width: 0px",
    "border-2" => "border-width: 2px",
    "border-4" => "border-width: 4px",
    "border-8" => "border-width: 8px",
    "border-t" => "border-top-width: 1px",
    "border-r" => "border-right-width: 1px",
    "border-b" => "border-bottom-width: 1px",
    "border-l" => "border-left-width: 1px",
    "border-solid" => "border-style: solid",
    "border-dashed" => "border-style: dashed",
    "border-dotted" => "border-style: dotted",
    "border-none" => "border-style: none",

    // Transitions & animation
    "transition" => "transition-property: color, background-color, border-color, opacity, box-shadow, transform; transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1); transition-duration: 150ms",
    "transition-all" => "transition-property: all; transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1); transition-duration: 150ms",
    "transition-none" => "transition-property: none",
    "transition-colors" => "transition-property: color, background-color, border-color; transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1); transition-duration: 150ms",
    "transition-opacity" => "transition-property: opacity; transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1); transition-duration: 150ms",
    "transition-transform" => "transition-property: transform; transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1); transition-duration: 150ms",
    "duration-75" => "transition-duration: 75ms",
    "duration-100" => "transition-duration: 100ms",
    "duration-150" => "transition-duration: 150ms",
    "duration-200" => "transition-duration: 200ms",
    "duration-300" => "transition-duration: 300ms",
    "duration-500" => "transition-duration: 500ms",
    "duration-700" => "transition-duration: 700ms",
    "duration-1000" => "transition-duration: 1000ms",
    "ease-linear" => "transition-timing-function: linear",
    "ease-in" => "transition-timing-function: cubic-bezier(0.4, 0, 1, 1)",
    "ease-out" => "transition-timing-function: cubic-bezier(0, 0, 0.2, 1)",
    "ease-in-out" => "transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1)",
    "animate-none" => "animation: none",
    "animate-spin" => "animation: spin 1s linear infinite",
    "animate-ping" => "animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
    "animate-pulse" => "animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
    "animate-bounce" => "animation: bounce 1s infinite",

    // Shadows, rings, outlines
    "shadow-sm" => "box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05)",
    "shadow" => "box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
    "shadow-md" => "box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    "shadow-lg" => "box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
    "shadow-xl" => "box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
    "shadow-2xl" => "box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25)",
    "shadow-inner" => "box-shadow: inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)",
    "shadow-none" => "box-shadow: none",
    "ring" => "box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.5)",
    "ring-1" => "box-shadow: 0 0 0 1px rgba(59, 130, 246, 0.5)",
    "ring-2" => "box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.5)",
    "ring-4" => "box-shadow: 0 0 0 4px rgba(59, 130, 246, 0.5)",
    "outline-none" => "outline: 2px solid transparent; outline-offset: 2px",

    // Opacity
    "opacity-0" => "opacity: 0",
    "opacity-25" => "opacity: 0.25",
    "opacity-50" => "opacity: 0.5",
    "opacity-75" => "opacity: 0.75",
    "opacity-100" => "opacity: 1",

    // Lists
    "list-none" => "list-style-type: none",
    "list-disc" => "list-style-type: disc",
    "list-decimal" => "list-style-type: decimal",
    "list-inside" => "list-style-position: inside",
    "list-outside" => "list-style-position: outside",

    // Visibility & interaction
    "visible" => "visibility: visible",
    "invisible" => "visibility: hidden",
    "cursor-auto" => "cursor: auto",
    "cursor-default" => "cursor: default",
    "cursor-pointer" => "cursor: pointer",
    "cursor-wait" => "cursor: wait",
    "cursor-text" => "cursor: text",
    "cursor-move" => "cursor: move",
    "cursor-not-allowed" => "cursor: not-allowed",
    "select-none" => "user-select: none",
    "select-text" => "user-select: text",
    "select-all" => "user-select: all",
    "select-auto" => "user-select: auto",
    "pointer-events-none" => "pointer-events: none",
    "pointer-events-auto" => "pointer-events: auto",
    "appearance-none" => "appearance: none",

    // Object fit
    "object-contain" => "object-fit: contain",
    "object-cover" => "object-fit: cover",
    "object-fill" => "object-fit: fill",
    "object-center" => "object-position: center",

    // Min/max sizing keywords
    "min-w-0" => "min-width: 0px",
    "min-w-full" => "min-width: 100%",
    "min-h-0" => "min-height: 0px",
    "min-h-full" => "min-height: 100%",
    "min-h-screen" => "min-height: 100vh",
    "max-h-full" => "max-height: 100%",
    "max-h-screen" => "max-height: 100vh",
};

static MAX_WIDTHS: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "none",
    "xs" => "20rem",
    "sm" => "24rem",
    "md" => "28rem",
    "lg" => "32rem",
    "xl" => "36rem",
    "2xl" => "42rem",
    "3xl" => "48rem",
    "4xl" => "56rem",
    "5xl" => "64rem",
    "6xl" => "72rem",
    "7xl" => "80rem",
    "full" => "100%",
    "min" => "min-content",
    "max" => "max-content",
    "prose" => "65ch",
    "screen-sm" => "640px",
    "screen-md" => "768px",
    "screen-lg" => "1024px",
    "screen-xl" => "1280px",
    "screen-2xl" => "1536px",
};

/// Looks up a static utility token verbatim.
pub fn static_rule(token: &str) -> Option<&'static str> {
    STATIC_RULES.get(token).copied()
}

/// Resolves a max-width scale token (`"2xl"` → `"42rem"`).
pub fn max_width(token: &str) -> Option<&'static str> {
    MAX_WIDTHS.get(token).copied()
}

/// Whether the keyword is a text-alignment keyword. Like the font-size
/// set, alignment keywords keep `text-center` out of the color matcher.
pub fn is_text_align_keyword(keyword: &str) -> bool {
    matches!(keyword, "left" | "center" | "right" | "justify")
}
