//! Route module emission.
//!
//! Stage 3 of the routegen pipeline. Maps an ordered route table to the text
//! of the generated `routes.tsx` module: one import line and one `<Route>`
//! element per descriptor, wrapped in the static `react-router-dom`
//! boilerplate. Pure data-to-text — no filesystem access — so the exact
//! output shape is unit-testable without fixtures.
//!
//! ## Generated Shape
//!
//! ```tsx
//! import Home from './pages/home'
//! import About from './pages/about'
//! import { Routes, Route, BrowserRouter } from 'react-router-dom'
//!
//! export default function AppRoutes() {
//!   return (
//!     <BrowserRouter>
//!       <Routes>
//!         <Route path="/" element={<Home />} />
//!         <Route path="/about" element={<About />} />
//!       </Routes>
//!     </BrowserRouter>
//!   )
//! }
//! ```
//!
//! The module is regenerated wholesale on every run; there is no merging
//! with previous content. Identical descriptor lists render byte-identical
//! text, which is what makes generation idempotent end to end.

use crate::routes::RouteDescriptor;

/// Intermediate form of the generated module: import lines and route
/// elements in table order, not yet joined into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub imports: Vec<String>,
    pub route_elements: Vec<String>,
}

impl GeneratedModule {
    /// One import line and one route element per descriptor, in order.
    pub fn from_routes(routes: &[RouteDescriptor]) -> Self {
        let imports = routes
            .iter()
            .map(|r| format!("import {} from '{}'", r.component_name, r.import_path))
            .collect();
        let route_elements = routes
            .iter()
            .map(|r| {
                format!(
                    "<Route path=\"{}\" element={{<{} />}} />",
                    r.route_path, r.component_name
                )
            })
            .collect();
        Self {
            imports,
            route_elements,
        }
    }

    /// Render the full module text. An empty table still renders the
    /// wrapper: a valid module exporting a router with zero routes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for import in &self.imports {
            out.push_str(import);
            out.push('\n');
        }
        out.push_str("import { Routes, Route, BrowserRouter } from 'react-router-dom'\n");
        out.push('\n');
        out.push_str("export default function AppRoutes() {\n");
        out.push_str("  return (\n");
        out.push_str("    <BrowserRouter>\n");
        out.push_str("      <Routes>\n");
        for element in &self.route_elements {
            out.push_str("        ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("      </Routes>\n");
        out.push_str("    </BrowserRouter>\n");
        out.push_str("  )\n");
        out.push_str("}\n");
        out
    }
}

/// Convenience wrapper: descriptors straight to module text.
pub fn emit_routes_module(routes: &[RouteDescriptor]) -> String {
    GeneratedModule::from_routes(routes).render()
}
