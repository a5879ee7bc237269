use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors disabled:pointer-events-none disabled:opacity-40 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-accent/60 hover:cursor-pointer select-none",
        variants: {
            variant: {
                Default: "bg-accent text-black hover:bg-accent/90",
                Destructive: "bg-red-600 text-white hover:bg-red-600/90",
                Outline: "border border-white/15 bg-transparent text-white hover:bg-white/10",
                Secondary: "bg-white/10 text-white hover:bg-white/20",
                Ghost: "text-white/80 hover:bg-white/10 hover:text-white",
                Link: "text-accent underline-offset-4 hover:underline",
            },
            size: {
                Default: "h-9 px-4 py-2",
                Sm: "h-8 gap-1.5 px-3",
                Icon: "size-9 rounded-full",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
