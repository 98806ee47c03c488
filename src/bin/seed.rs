// src/bin/seed.rs
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::time::{Duration, Instant};

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct CreatedRecord {
    id: String,
}

#[derive(Debug)]
struct SeedResult {
    resource: &'static str,
    name: String,
    id: Option<String>,
    duration_secs: f64,
}

// --- Sample data ---

fn sample_guides() -> Vec<Value> {
    vec![
        json!({
            "name": "Mamadou Diallo",
            "email": "mamadou.diallo@guide.gn",
            "phone": "+224 622 123 456",
            "specialty": "Fouta Djallon",
            "experience": 8,
            "price": 75000,
            "languages": ["Français", "Peul", "Anglais"],
            "services": ["Randonnées", "Visites culturelles", "Photographie", "Transport"],
            "description": "Guide expérimenté spécialisé dans les randonnées du Fouta Djallon et la découverte des chutes d'eau.",
            "certifications": ["Guide Officiel", "Premiers Secours", "Écotourisme"],
            "availability": "Disponible toute l'année"
        }),
        json!({
            "name": "Fatoumata Camara",
            "email": "fatoumata.camara@guide.gn",
            "phone": "+224 628 987 654",
            "specialty": "Conakry & Îles de Loos",
            "experience": 6,
            "price": 65000,
            "languages": ["Français", "Soussou", "Anglais"],
            "services": ["Visites urbaines", "Excursions îles", "Gastronomie", "Shopping"],
            "description": "Spécialiste de Conakry et des îles de Loos, passionnée d'histoire et de culture guinéenne.",
            "certifications": ["Guide Touristique", "Histoire Locale", "Langues"],
            "availability": "Lundi à Samedi"
        }),
        json!({
            "name": "Ibrahima Sow",
            "email": "ibrahima.sow@guide.gn",
            "phone": "+224 625 456 789",
            "specialty": "Guinée Forestière",
            "experience": 10,
            "price": 80000,
            "languages": ["Français", "Kissi", "Anglais"],
            "services": ["Safari", "Observation faune", "Botanique", "Camping"],
            "description": "Expert de la Guinée Forestière, spécialisé dans l'observation de la faune et la botanique.",
            "certifications": ["Guide Nature", "Biologie", "Survie"],
            "availability": "Saison sèche uniquement"
        }),
        json!({
            "name": "Aissatou Barry",
            "email": "aissatou.barry@guide.gn",
            "phone": "+224 621 789 123",
            "specialty": "Haute Guinée",
            "experience": 7,
            "price": 70000,
            "languages": ["Français", "Malinké", "Anglais"],
            "services": ["Artisanat", "Marchés locaux", "Cérémonies", "Musique"],
            "description": "Guide culturelle spécialisée dans l'artisanat et les traditions de la Haute Guinée.",
            "certifications": ["Culture Locale", "Artisanat", "Musique"],
            "availability": "Flexible"
        }),
        json!({
            "name": "Sékou Touré",
            "email": "sekou.toure@guide.gn",
            "phone": "+224 620 111 222",
            "specialty": "Multi-régions",
            "experience": 12,
            "price": 95000,
            "languages": ["Français", "Peul", "Soussou", "Malinké"],
            "services": ["Circuits complets", "Logistique", "Interprétation", "Urgences"],
            "description": "Guide senior avec une expertise dans toutes les régions de la Guinée.",
            "certifications": ["Guide Senior", "Logistique", "Sécurité", "Langues"],
            "availability": "Sur réservation"
        }),
        json!({
            "name": "Mariama Condé",
            "email": "mariama.conde@guide.gn",
            "phone": "+224 627 333 444",
            "specialty": "Écotourisme",
            "experience": 5,
            "price": 85000,
            "languages": ["Français", "Anglais", "Espagnol"],
            "services": ["Écotourisme", "Conservation", "Éducation", "Recherche"],
            "description": "Spécialiste en écotourisme et développement durable.",
            "certifications": ["Écotourisme", "Conservation", "Développement Durable"],
            "availability": "Toute l'année"
        }),
    ]
}

fn sample_sites() -> Vec<Value> {
    let sites = [
        ("Chutes de Kinkon", "haute-guinee", 10.7596, -11.4346, "Nature", "Magnifiques chutes d'eau dans la région de Haute Guinée"),
        ("Mont Nimba", "guinee-forestiere", 7.6167, -8.4167, "Montagne", "Réserve naturelle intégrale du mont Nimba"),
        ("Îles de Loos", "basse-guinee", 9.5167, -13.8167, "Île", "Archipel pittoresque près de Conakry"),
        ("Fouta Djallon", "moyenne-guinee", 11.0, -12.0, "Plateau", "Château d'eau de l'Afrique de l'Ouest"),
        ("Parc National du Haut Niger", "haute-guinee", 11.75, -11.0, "Parc", "Parc national avec une riche biodiversité"),
    ];

    sites
        .iter()
        .map(|(name, region, lat, lng, category, description)| {
            json!({
                "name": name,
                "location": region,
                "region": region,
                "category": category,
                "description": description,
                "coordinates": {"lat": lat, "lng": lng}
            })
        })
        .collect()
}

// --- Seeder ---

struct Seeder {
    base_url: String,
    client: Client,
    token: Option<String>,
    results: Vec<SeedResult>,
}

impl Seeder {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            client,
            token: None,
            results: Vec::new(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .context("Login request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Login refused: HTTP {} - {}", status, body);
        }

        let login: LoginResponse = response.json().await.context("Invalid login response")?;
        self.token = Some(login.token);
        Ok(())
    }

    async fn create(&self, resource: &str, payload: &Value) -> Result<String> {
        let token = self.token.as_deref().context("Not signed in")?;

        let response = self
            .client
            .post(format!("{}/admin/{}", self.base_url, resource))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("HTTP {} - {}", status, body);
        }

        let created: CreatedRecord = response.json().await?;
        Ok(created.id)
    }

    async fn seed(&mut self, resource: &'static str, records: Vec<Value>) {
        println!("\n{}🌱 Seeding {} ({} records)...{}", BOLD, resource, records.len(), RESET);

        for record in records {
            let name = record["name"].as_str().unwrap_or("?").to_string();
            let start_time = Instant::now();

            let id = match self.create(resource, &record).await {
                Ok(id) => {
                    println!("{}✅ {}{}", GREEN, name, RESET);
                    Some(id)
                }
                Err(e) => {
                    println!("{}❌ {}: {}{}", RED, name, e, RESET);
                    None
                }
            };

            self.results.push(SeedResult {
                resource,
                name,
                id,
                duration_secs: start_time.elapsed().as_secs_f64(),
            });
        }
    }

    fn print_summary(&self) {
        println!("\n\n{}📋 Seeding Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────────────────────");
        println!("{:<16} {:<36} {:<10} {:>10}", "Resource", "Name", "Status", "Duration");
        println!("──────────────────────────────────────────────────────────────────────────────");

        for res in &self.results {
            let status_icon = if res.id.is_some() { "✅" } else { "❌" };
            println!(
                "{:<16} {:<36} {:<10} {:>9.2}s",
                res.resource, res.name, status_icon, res.duration_secs
            );
        }

        let created = self.results.iter().filter(|r| r.id.is_some()).count();
        let failed = self.results.len() - created;

        println!("──────────────────────────────────────────────────────────────────────────────");
        println!("{}📊 Totals:{}", BOLD, RESET);
        println!("  • Records created: {}{}{}", GREEN, created, RESET);
        if failed > 0 {
            println!("  • Failures: {}{}{}", RED, failed, RESET);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url =
        env::var("SEED_API_URL").unwrap_or_else(|_| "http://localhost:8002".to_string());
    let email = env::var("SEED_ADMIN_EMAIL")
        .or_else(|_| {
            env::var("ADMIN_EMAILS").map(|list| list.split(',').next().unwrap_or("").trim().to_string())
        })
        .context("SEED_ADMIN_EMAIL or ADMIN_EMAILS must be set")?;
    let password = env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| {
        println!(
            "{}⚠️  SEED_ADMIN_PASSWORD not set. Using a placeholder only a server without AUTH_API_KEY accepts.{}",
            YELLOW, RESET
        );
        "development".to_string()
    });

    let mut seeder = Seeder::new(base_url)?;

    println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
    if !seeder.check_service_health().await {
        bail!("Service unavailable at {}", seeder.base_url);
    }
    println!("{}✅ Service available{}", GREEN, RESET);

    seeder.login(&email, &password).await?;
    println!("{}🔑 Signed in as {}{}", GREEN, email, RESET);

    seeder.seed("guides", sample_guides()).await;
    seeder.seed("sites", sample_sites()).await;

    seeder.print_summary();
    Ok(())
}
