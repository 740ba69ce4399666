use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::components::floating_shapes::FloatingShapes;
use crate::components::lead_capture_dialog::LeadCaptureDialog;
use crate::components::phone_mockup::PhoneMockup;
use crate::hooks::scroll::use_window_scroll;
use crate::pages::counters::{format_brl, use_in_view_counter};

/// Mobile sticky CTA shows up past this scroll offset.
const STICKY_CTA_OFFSET: f64 = 480.0;

#[function_component(Landing)]
pub fn landing() -> Html {
    let dialog_open = use_state(|| false);
    let scroll_y = use_window_scroll();

    let lost_clients_ref = use_node_ref();
    let lost_fees_ref = use_node_ref();
    let lost_clients = use_in_view_counter(lost_clients_ref.clone(), 3);
    let lost_fees = use_in_view_counter(lost_fees_ref.clone(), 15_000);

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };
    let on_open_change = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |open: bool| dialog_open.set(open))
    };

    html! {
        <div class="landing">
            <header class="hero-bg">
                <FloatingShapes />
                <nav class="landing-nav" aria-label="Navegação principal">
                    <div class="landing-nav__brand">
                        <div class="landing-nav__dot" aria-hidden="true" />
                        <span>{"True Rise"}</span>
                    </div>
                    <div class="landing-nav__links">
                        <a href="#como-funciona">{"Como funciona"}</a>
                        <a href="#seguranca">{"Segurança"}</a>
                        <a href="#precos">{"Preços"}</a>
                        <a href="#contato">{"Contato"}</a>
                    </div>
                    <button class="landing-nav__outline" onclick={open_dialog.clone()}>
                        {"Entrar na Lista"}
                    </button>
                </nav>

                <main>
                    <section class="hero">
                        <div class="hero__content">
                            <h1 class="fade-up">{"IA Jurídica True Rise"}</h1>
                            <p class="hero__subtitle fade-up">{"Seu escritório atendendo 24h no WhatsApp"}</p>
                            <div class="hero__actions fade-up">
                                <CtaButton onclick={open_dialog.clone()}>
                                    {"Entrar na Lista de Espera"}
                                </CtaButton>
                                <a href="#como-funciona" class="story-link">{"Ver como funciona"}</a>
                            </div>
                            <div class="hero__proof fade-up" aria-label="Provas de segurança e rapidez">
                                <span>{"🔒 Dados protegidos"}</span>
                                <span>{"•"}</span>
                                <span>{"⚡ Ativa em 48h"}</span>
                                <span>{"•"}</span>
                                <span>{"🏆 Tecnologia premiada"}</span>
                            </div>
                        </div>
                        <div class="hero__mockup slide-in">
                            <PhoneMockup />
                        </div>
                    </section>
                </main>
            </header>

            <section id="problema" class="section section--muted">
                <div class="container">
                    <h2>{"Enquanto você lê isso..."}</h2>
                    <div class="grid grid--three">
                        <div class="card">
                            <p ref={lost_clients_ref}>
                                <strong>{format!("❌ {}", lost_clients)}</strong>
                                {" clientes mandaram mensagem e desistiram"}
                            </p>
                        </div>
                        <div class="card">
                            <p>{"❌ Seu concorrente respondeu na hora"}</p>
                        </div>
                        <div class="card">
                            <p ref={lost_fees_ref}>
                                <strong>{format!("❌ {}", format_brl(lost_fees))}</strong>
                                {" em honorários perdidos este mês"}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="como-funciona" class="section">
                <div class="container">
                    <h2>{"Como funciona na prática"}</h2>
                    <div class="grid grid--three">
                        <div class="card card--step">
                            <span class="card__icon" aria-hidden="true">{"💬"}</span>
                            <h3>{"Cliente manda mensagem"}</h3>
                            <p class="muted">{"Direto no WhatsApp do seu escritório"}</p>
                        </div>
                        <div class="card card--step">
                            <span class="card__icon" aria-hidden="true">{"🤖"}</span>
                            <h3>{"IA responde NA HORA"}</h3>
                            <p class="muted">{"Com conhecimento jurídico especializado"}</p>
                        </div>
                        <div class="card card--step">
                            <span class="card__icon" aria-hidden="true">{"📄"}</span>
                            <h3>{"Você recebe o resumo"}</h3>
                            <p class="muted">{"Preparado para a consulta agendada"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="depoimentos" class="section section--muted">
                <div class="container">
                    <blockquote class="testimonial">
                        <p>
                            {"“Achei que ia perder o toque pessoal. Mas agora tenho MAIS tempo para dar atenção real aos clientes nas consultas. Recuperamos 47 horas por mês.”"}
                        </p>
                        <footer class="muted">{"— Dr. João Coelho, Vaz & Coelho Advogados"}</footer>
                    </blockquote>
                </div>
            </section>

            <section id="seguranca" class="section">
                <div class="container">
                    <h2>{"Segurança em primeiro lugar"}</h2>
                    <div class="grid grid--two">
                        <div class="card"><p>{"🔐 Dados criptografados ponta a ponta"}</p></div>
                        <div class="card"><p>{"📋 Conformidade total com LGPD"}</p></div>
                    </div>
                </div>
            </section>

            <section id="precos" class="section section--muted">
                <div class="container">
                    <h2>{"Quanto custa perder clientes?"}</h2>
                    <div class="grid grid--two">
                        <div class="card">
                            <p>{format!("❌ Atendente: {}/mês + encargos + férias", format_brl(2_500))}</p>
                        </div>
                        <div class="card">
                            <p>{format!("✅ Sua IA Jurídica: {}/mês", format_brl(500))}</p>
                            <p class="muted small">{format!("Implementação única de {}", format_brl(2_500))}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="cta" class="section section--center">
                <div class="container">
                    <h2 class="section__title--large">{"Vagas limitadas"}</h2>
                    <p class="muted">{"Abrimos apenas 20 vagas por mês para garantir implementação perfeita"}</p>
                    <div class="section__cta">
                        <CtaButton onclick={open_dialog.clone()}>{"Garantir Minha Vaga"}</CtaButton>
                    </div>
                    <p class="muted small">{"Sem compromisso. Demonstração personalizada incluída."}</p>
                </div>
            </section>

            <footer id="contato" class="landing-footer">
                <div class="container landing-footer__inner">
                    <p class="muted">{"© 2025 True Rise - Transformação Digital com IA"}</p>
                    <nav class="landing-footer__links" aria-label="Links do rodapé">
                        <a href="#">{"Termos de Uso"}</a>
                        <span>{"|"}</span>
                        <a href="#">{"Política de Privacidade"}</a>
                        <span>{"|"}</span>
                        <a href="#">{"Contato"}</a>
                        <span>{"|"}</span>
                        <span>{"WhatsApp: (11) 99999-9999"}</span>
                    </nav>
                </div>
            </footer>

            {
                if scroll_y > STICKY_CTA_OFFSET {
                    html! {
                        <div class="sticky-cta">
                            <CtaButton class="sticky-cta__button" onclick={open_dialog.clone()}>
                                {"Garantir Minha Vaga"}
                            </CtaButton>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <LeadCaptureDialog open={*dialog_open} {on_open_change} />

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #fbfaf7;
                    color: #1c2a25;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }
                .container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; }
                .muted { color: #5b6b65; }
                .small { font-size: 0.8rem; }
                .hero-bg {
                    position: relative;
                    border-bottom: 1px solid rgba(28, 42, 37, 0.08);
                    background: radial-gradient(circle at top right, rgba(31, 122, 90, 0.08), transparent 60%);
                }
                .landing-nav {
                    position: relative;
                    z-index: 1;
                    max-width: 1120px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .landing-nav__brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; font-size: 0.9rem; }
                .landing-nav__dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #1f7a5a; }
                .landing-nav__links { display: none; gap: 1.5rem; }
                .landing-nav__links a { color: #5b6b65; text-decoration: none; font-size: 0.9rem; }
                .landing-nav__links a:hover { color: #1c2a25; }
                .landing-nav__outline {
                    display: none;
                    border: 1px solid rgba(28, 42, 37, 0.2);
                    background: transparent;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .hero {
                    position: relative;
                    z-index: 1;
                    max-width: 1120px;
                    margin: 0 auto;
                    padding: 2.5rem 1.5rem;
                    min-height: 92vh;
                    display: grid;
                    grid-template-columns: 1fr;
                    align-items: center;
                    gap: 3rem;
                }
                .hero h1 { font-size: 2.5rem; line-height: 1.15; margin: 0; }
                .hero__subtitle { margin-top: 1rem; font-size: 1.15rem; color: #5b6b65; }
                .hero__actions { margin-top: 2rem; display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; }
                .hero__proof { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: 1rem; font-size: 0.75rem; color: #5b6b65; }
                .story-link { color: #1f7a5a; font-size: 0.9rem; }
                .section { padding: 5rem 0; }
                .section--muted { background: #f1eee7; }
                .section--center { text-align: center; }
                .section h2 { font-size: 1.5rem; font-weight: 600; margin: 0; }
                .section__title--large { font-size: 1.9rem !important; }
                .section__cta { margin: 2rem 0 0.75rem; display: flex; justify-content: center; }
                .grid { margin-top: 2rem; display: grid; gap: 1.5rem; grid-template-columns: 1fr; }
                .card {
                    background: #ffffff;
                    border: 1px solid rgba(28, 42, 37, 0.08);
                    border-radius: 12px;
                    padding: 1.5rem;
                    font-size: 1.05rem;
                }
                .card--step { transition: transform 0.2s ease; }
                .card--step:hover { transform: translateY(-2px); }
                .card__icon { font-size: 1.5rem; }
                .card h3 { margin: 0.75rem 0 0; font-size: 1rem; }
                .testimonial {
                    margin: 0 auto;
                    max-width: 48rem;
                    background: #ffffff;
                    border: 1px solid rgba(28, 42, 37, 0.08);
                    border-radius: 12px;
                    padding: 2rem;
                    font-size: 1.15rem;
                }
                .testimonial footer { margin-top: 1rem; font-size: 0.85rem; }
                .landing-footer { border-top: 1px solid rgba(28, 42, 37, 0.08); padding: 2.5rem 0; }
                .landing-footer__inner { display: flex; flex-direction: column; align-items: center; gap: 1rem; }
                .landing-footer__links { display: flex; flex-wrap: wrap; gap: 1rem; font-size: 0.85rem; color: #5b6b65; }
                .landing-footer__links a { color: #5b6b65; text-decoration: none; }
                .sticky-cta {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 50;
                    padding: 0.75rem;
                    border-top: 1px solid rgba(28, 42, 37, 0.08);
                    background: rgba(251, 250, 247, 0.95);
                    backdrop-filter: blur(8px);
                }
                .sticky-cta__button { width: 100%; }
                .fade-up { animation: fadeUp 0.6s cubic-bezier(0.22, 1, 0.36, 1) both; }
                .fade-up:nth-child(2) { animation-delay: 0.1s; }
                .fade-up:nth-child(3) { animation-delay: 0.2s; }
                .fade-up:nth-child(4) { animation-delay: 0.3s; }
                .slide-in { animation: slideIn 0.7s cubic-bezier(0.22, 1, 0.36, 1) both; }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes slideIn {
                    from { opacity: 0; transform: translateX(40px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @media (min-width: 768px) {
                    .landing-nav__links { display: flex; }
                    .landing-nav__outline { display: block; }
                    .hero { grid-template-columns: 1fr 1fr; }
                    .hero h1 { font-size: 3rem; }
                    .grid--two { grid-template-columns: repeat(2, 1fr); }
                    .grid--three { grid-template-columns: repeat(3, 1fr); }
                    .landing-footer__inner { flex-direction: row; justify-content: space-between; }
                    .sticky-cta { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
