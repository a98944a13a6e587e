use crate::frameworks::Framework;
use crate::types::{FileCandidate, WalkthroughStep};

/// Build the ordered learning walkthrough for a workspace.
///
/// Pure function of the ranked suggestions and the detected frameworks.
/// Always opens with the README and manifest steps, then appends each
/// detected framework's fixed sub-sequence (frameworks arrive in canonical
/// scan order and their branches are additive), and always closes with the
/// four generic steps. Steps whose target cannot be resolved against the
/// suggestion labels are kept targetless.
pub fn build_walkthrough(
    suggestions: &[FileCandidate],
    frameworks: &[Framework],
) -> Vec<WalkthroughStep> {
    let mut steps = Vec::new();

    steps.push(WalkthroughStep::new(
        "Read the README",
        "Start with the project's own description of what it is and how to run it.",
        target_by_suffix(suggestions, &["readme.md", "readme"]),
    ));
    steps.push(WalkthroughStep::new(
        "Check the package manifest",
        "Dependencies and scripts reveal the toolchain before any source file does.",
        target_by_suffix(suggestions, &["package.json"]),
    ));

    for framework in frameworks {
        append_framework_steps(&mut steps, *framework, suggestions, frameworks);
    }

    steps.push(WalkthroughStep::new(
        "Find the app entry point",
        "Everything the application does starts from this file.",
        target_by_suffix(
            suggestions,
            &[
                "main.ts", "main.tsx", "main.js", "main.jsx", "index.ts", "index.tsx",
                "index.js", "app.ts", "app.js",
            ],
        ),
    ));
    steps.push(WalkthroughStep::new(
        "Trace the routes and pages",
        "The route table is the map from URLs to the code that serves them.",
        target_by_fragment(suggestions, &["routes/", "router", "pages/"]),
    ));
    steps.push(WalkthroughStep::new(
        "Inspect the controllers and handlers",
        "Handlers show how requests are validated and dispatched.",
        target_by_fragment(suggestions, &["controller", "handler"]),
    ));
    steps.push(WalkthroughStep::new(
        "Follow the data and service layer",
        "Services and models hold the business logic behind the handlers.",
        target_by_fragment(suggestions, &["service", "model", "store"]),
    ));

    steps
}

fn append_framework_steps(
    steps: &mut Vec<WalkthroughStep>,
    framework: Framework,
    suggestions: &[FileCandidate],
    detected: &[Framework],
) {
    match framework {
        Framework::NextJs => {
            steps.push(WalkthroughStep::new(
                "Review the Next.js routing tree",
                "File-system routing under app/ or pages/ decides every URL.",
                target_by_fragment(suggestions, &["app/", "pages/"]),
            ));
            steps.push(WalkthroughStep::new(
                "Check the API routes",
                "Server endpoints live beside the pages as route handlers.",
                target_by_fragment(suggestions, &["api/"]),
            ));
        }
        // The Vite pair supersedes the plain React step when both are present.
        Framework::React => {
            if !detected.contains(&Framework::Vite) {
                steps.push(WalkthroughStep::new(
                    "Find the React root render",
                    "The createRoot call is where the component tree attaches to the DOM.",
                    target_by_suffix(
                        suggestions,
                        &["main.tsx", "main.jsx", "index.tsx", "index.jsx"],
                    ),
                ));
            }
        }
        Framework::Vite => {
            steps.push(WalkthroughStep::new(
                "Check the Vite config",
                "Plugins and aliases here shape how every module resolves.",
                target_by_suffix(
                    suggestions,
                    &["vite.config.ts", "vite.config.js", "vite.config.mjs"],
                ),
            ));
            steps.push(WalkthroughStep::new(
                "Find the Vite entry module",
                "The entry module mounts the application into index.html.",
                target_by_suffix(suggestions, &["main.ts", "main.tsx", "main.js", "main.jsx"]),
            ));
        }
        Framework::Vue => {
            steps.push(WalkthroughStep::new(
                "Find the Vue bootstrap",
                "createApp wires plugins, the router, and the root component.",
                target_by_suffix(suggestions, &["main.js", "main.ts"]),
            ));
            steps.push(WalkthroughStep::new(
                "Read the root component",
                "App.vue is the top of the component tree.",
                target_by_suffix(suggestions, &["app.vue"]),
            ));
            steps.push(WalkthroughStep::new(
                "Review the Vue router",
                "Route records map paths to views.",
                target_by_fragment(suggestions, &["router"]),
            ));
        }
        Framework::Angular => {
            steps.push(WalkthroughStep::new(
                "Read the root Angular module",
                "AppModule declares what the application is made of.",
                target_by_suffix(suggestions, &["app.module.ts"]),
            ));
            steps.push(WalkthroughStep::new(
                "Review the Angular routing module",
                "The routing module is Angular's URL map.",
                target_by_suffix(suggestions, &["app-routing.module.ts"]),
            ));
        }
        Framework::Svelte => {
            steps.push(WalkthroughStep::new(
                "Check the Svelte config",
                "Adapters and preprocessing are configured here.",
                target_by_suffix(suggestions, &["svelte.config.js", "svelte.config.ts"]),
            ));
            steps.push(WalkthroughStep::new(
                "Find the Svelte entry",
                "The entry mounts the root component.",
                target_by_suffix(suggestions, &["main.ts", "main.js"]),
            ));
        }
        Framework::Nuxt => {
            steps.push(WalkthroughStep::new(
                "Check the Nuxt config",
                "Modules and rendering options are declared here.",
                target_by_suffix(suggestions, &["nuxt.config.ts", "nuxt.config.js"]),
            ));
            steps.push(WalkthroughStep::new(
                "Find the Nuxt app shell",
                "app.vue wraps every page the framework renders.",
                target_by_suffix(suggestions, &["app.vue"]),
            ));
        }
        Framework::Astro => {
            steps.push(WalkthroughStep::new(
                "Check the Astro config",
                "Integrations and output mode live here.",
                target_by_suffix(
                    suggestions,
                    &["astro.config.mjs", "astro.config.ts", "astro.config.js"],
                ),
            ));
            steps.push(WalkthroughStep::new(
                "Find the landing page",
                "Pages under src/pages become routes by convention.",
                target_by_suffix(suggestions, &["index.astro"]),
            ));
        }
        Framework::NestJs => {
            steps.push(WalkthroughStep::new(
                "Find the Nest bootstrap",
                "main.ts creates the application out of the root module.",
                target_by_suffix(suggestions, &["main.ts"]),
            ));
            steps.push(WalkthroughStep::new(
                "Read the root module",
                "AppModule pulls in every controller and provider.",
                target_by_suffix(suggestions, &["app.module.ts"]),
            ));
        }
        Framework::Express | Framework::Fastify => {
            steps.push(WalkthroughStep::new(
                "Find the server setup",
                "The server file wires middleware and starts listening.",
                target_by_suffix(
                    suggestions,
                    &["server.ts", "server.js", "app.ts", "app.js", "index.ts", "index.js"],
                ),
            ));
            steps.push(WalkthroughStep::new(
                "Trace route registration",
                "Route registrations connect paths to their handlers.",
                target_by_fragment(suggestions, &["routes/", "router", "route"]),
            ));
        }
    }
}

/// First suggestion whose lowercased label ends with any of the suffixes,
/// suffixes tried in list order
fn target_by_suffix(suggestions: &[FileCandidate], suffixes: &[&str]) -> Option<String> {
    for suffix in suffixes {
        for candidate in suggestions {
            if candidate.label.to_lowercase().ends_with(suffix) {
                return Some(candidate.path.clone());
            }
        }
    }
    None
}

/// First suggestion whose lowercased label contains any of the fragments,
/// fragments tried in list order
fn target_by_fragment(suggestions: &[FileCandidate], fragments: &[&str]) -> Option<String> {
    for fragment in fragments {
        for candidate in suggestions {
            if candidate.label.to_lowercase().contains(fragment) {
                return Some(candidate.path.clone());
            }
        }
    }
    None
}
