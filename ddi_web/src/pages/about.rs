// About pages - static project and team descriptions
use crate::components::GlassCard;
use leptos::prelude::*;

const PAGE_STYLE: &str = "max-width: 800px; margin: auto; text-align: left;";

#[component]
pub fn AboutProjectPage() -> impl IntoView {
    view! {
        <div style=PAGE_STYLE>
            <h2>"About the Project"</h2>
            <GlassCard>
                <p>
                    "This project, BioGPT-DI, is a real-world AI healthcare assistant designed to "
                    "predict drug-drug interactions (DDI) and generate explainable clinical reports."
                </p>
                <p>"It leverages a powerful two-engine AI system:"</p>
                <ul>
                    <li>
                        "A custom-trained " <strong>"BioBERT"</strong> " model, fine-tuned on the DDI "
                        "2013 Corpus, serves as a high-accuracy classifier to predict the specific type "
                        "of interaction."
                    </li>
                    <li>
                        "Microsoft's " <strong>"BioGPT"</strong> ", a generative model, then writes "
                        "detailed, human-readable summaries based on the prediction, tailored for both "
                        "healthcare professionals and patients."
                    </li>
                </ul>
                <p>
                    "The goal is to move beyond simple database lookups and provide actionable, "
                    "context-aware insights to improve medication safety."
                </p>
            </GlassCard>
        </div>
    }
}

#[component]
pub fn AboutGroupPage() -> impl IntoView {
    let members = [
        ("Team Member 1:", "Lead AI Architect"),
        ("Team Member 2:", "Frontend & UI/UX Specialist"),
        ("Team Member 3:", "Data Analyst & Researcher"),
    ];

    view! {
        <div style=PAGE_STYLE>
            <h2>"About the Group"</h2>
            <GlassCard>
                <p>"This is where you can describe your team or group."</p>
                <p>
                    "You can add information about your members, your mission, and your collective "
                    "expertise in fields like NLP, Generative AI, Health AI, and Bioinformatics."
                </p>
                {members
                    .into_iter()
                    .map(|(who, role)| {
                        view! {
                            <div class="team-member">
                                <strong>{who}</strong>
                                " "
                                {role}
                            </div>
                        }
                    })
                    .collect_view()}
            </GlassCard>
        </div>
    }
}
