pub mod content;
pub mod refund_calculator;

use crate::components::layout::Layout;
use content::{LegalDocument, PRIVACY, REFUND_POLICY, TERMS};
use leptos::*;
use leptos_meta::Title;
use refund_calculator::RefundCalculator;

#[component]
fn LegalPage(document: &'static LegalDocument, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <Title text=format!("{} · Velomart", document.title) />
        <article class="max-w-3xl mx-auto space-y-8">
            <header>
                <h1 class="text-3xl font-bold text-fg">{document.title}</h1>
                <p class="text-sm text-fg-muted">"Last updated " {document.updated}</p>
            </header>
            <nav aria-label="Contents">
                <ol class="list-decimal list-inside text-sm text-link space-y-1">
                    {document
                        .sections
                        .iter()
                        .map(|s| view! { <li><a href=format!("#{}", s.id)>{s.heading}</a></li> })
                        .collect_view()}
                </ol>
            </nav>
            {document
                .sections
                .iter()
                .map(|s| {
                    view! {
                        <section id=s.id class="space-y-2">
                            <h2 class="text-xl font-semibold text-fg">{s.heading}</h2>
                            {s.paragraphs
                                .iter()
                                .map(|p| view! { <p class="text-fg-muted leading-relaxed">{*p}</p> })
                                .collect_view()}
                        </section>
                    }
                })
                .collect_view()}
            {children.map(|c| c())}
        </article>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Layout>
            <LegalPage document=&TERMS />
        </Layout>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Layout>
            <LegalPage document=&PRIVACY />
        </Layout>
    }
}

#[component]
pub fn RefundPolicyPage() -> impl IntoView {
    view! {
        <Layout>
            <LegalPage document=&REFUND_POLICY>
                <RefundCalculator />
            </LegalPage>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn refund_policy_embeds_calculator() {
        let html = render_as(None, || view! { <RefundPolicyPage /> });
        assert!(html.contains("Refund Policy"));
        assert!(html.contains("Return window"));
        assert!(html.contains("Refund estimator"));
    }

    #[test]
    fn terms_page_is_public_and_has_contents() {
        let html = render_as(None, || view! { <TermsPage /> });
        assert!(html.contains("Terms of Service"));
        assert!(html.contains("href=\"#acceptance\""));
        assert!(!html.contains("Refund estimator"));
    }
}
