use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `homework-bot --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate homework-bot build metadata");
}
