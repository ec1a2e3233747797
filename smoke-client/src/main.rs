use anyhow::{Context, Result};
use colored::*;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    let api_url = std::env::var("API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let api = Api {
        base_url: api_url.trim_end_matches('/').to_string(),
        client: Client::new(),
    };

    println!("{}", "🚗 Vehicle Rental Smoke Client".bright_blue().bold());
    println!("{}", "==============================".bright_blue());
    println!("API: {}", api.base_url);

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🚗 Listar vehículos");
        println!("2. 👤 Listar clientes");
        println!("3. ➕ Registrar cliente");
        println!("4. 📑 Listar bookings");
        println!("5. ➕ Crear booking");
        println!("6. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-6): ")?;

        let result = match choice.as_str() {
            "1" => list_vehicles(&api).await,
            "2" => list_customers(&api).await,
            "3" => add_customer(&api).await,
            "4" => list_bookings(&api).await,
            "5" => add_booking(&api).await,
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ Error: {:#}", e).bright_red());
        }
    }

    Ok(())
}

struct Api {
    base_url: String,
    client: Client,
}

impl Api {
    async fn get(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .with_context(|| format!("GET {}", path))?;
        read_body(response).await
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(payload)
            .send()
            .await
            .with_context(|| format!("POST {}", path))?;
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<Value> {
    let status = response.status();
    let body: Value = response.json().await.context("Respuesta no es JSON")?;
    if !status.is_success() {
        let message = body["error"].as_str().unwrap_or("sin detalle");
        anyhow::bail!("{} - {}", status, message);
    }
    Ok(body)
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn rows(body: &Value) -> &[Value] {
    body.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

async fn list_vehicles(api: &Api) -> Result<()> {
    let body = api.get("/vehicles").await?;
    println!("{}", "🚗 VEHÍCULOS".bright_cyan().bold());
    for v in rows(&body) {
        println!(
            "  #{} {} ({}) - ₹{}/day",
            text(&v["id"]),
            text(&v["name"]),
            text(&v["type"]),
            text(&v["rent_per_day"])
        );
    }
    Ok(())
}

async fn list_customers(api: &Api) -> Result<()> {
    let body = api.get("/customers").await?;
    println!("{}", "👤 CLIENTES".bright_cyan().bold());
    for c in rows(&body) {
        println!("  #{} {} - {}", text(&c["id"]), text(&c["name"]), text(&c["contact"]));
    }
    Ok(())
}

async fn list_bookings(api: &Api) -> Result<()> {
    let body = api.get("/bookings").await?;
    println!("{}", "📑 BOOKINGS".bright_cyan().bold());
    for b in rows(&body) {
        println!(
            "  #{} {} → {} · {} días · ₹{}",
            text(&b["id"]),
            text(&b["customer"]),
            text(&b["vehicle"]),
            text(&b["days"]),
            text(&b["total_rent"])
        );
    }
    Ok(())
}

async fn add_customer(api: &Api) -> Result<()> {
    let name = prompt("Nombre: ")?;
    let contact = prompt("Contacto: ")?;
    if name.is_empty() || contact.is_empty() {
        println!("{}", "⚠️ Nombre y contacto son obligatorios".bright_yellow());
        return Ok(());
    }

    let body = api
        .post("/customers", &json!({ "name": name, "contact": contact }))
        .await?;
    println!("{}", format!("✅ {}", text(&body["message"])).bright_green());
    Ok(())
}

async fn add_booking(api: &Api) -> Result<()> {
    let vehicle_id = prompt("Vehicle id: ")?;
    let customer_id = prompt("Customer id: ")?;
    let days = prompt("Días: ")?;
    if vehicle_id.is_empty() || customer_id.is_empty() || days.is_empty() {
        println!("{}", "⚠️ Completa todos los campos".bright_yellow());
        return Ok(());
    }

    // Se envían como strings, igual que los formularios web
    let body = api
        .post(
            "/bookings",
            &json!({ "vehicle_id": vehicle_id, "customer_id": customer_id, "days": days }),
        )
        .await?;
    println!(
        "{}",
        format!("✅ Booking creado. Total: ₹{}", text(&body["total_rent"])).bright_green()
    );
    Ok(())
}
