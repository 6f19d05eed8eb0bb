//! Generic list / get / delete over the stores.
//!
//! `flightdeck list flights`, `flightdeck delete airplanes GA-A320-001`, etc.

use anyhow::Result;

use super::print_json;
use crate::app::App;

/// Canonical resource name for a singular or plural spelling.
fn resource_name(resource: &str) -> Result<&'static str> {
    match resource.to_lowercase().as_str() {
        "airline" | "airlines" => Ok("airlines"),
        "airplane" | "airplanes" => Ok("airplanes"),
        "flight" | "flights" => Ok("flights"),
        "class-flight" | "class-flights" | "classflight" | "classflights" => Ok("class-flights"),
        "seat" | "seats" => Ok("seats"),
        "booking" | "bookings" => Ok("bookings"),
        "passenger" | "passengers" => Ok("passengers"),
        "coupon" | "coupons" => Ok("coupons"),
        "post" | "posts" => Ok("posts"),
        "home" => Ok("home"),
        _ => Err(anyhow::anyhow!("Unknown resource type: {}", resource)),
    }
}

fn numeric_id(id: &str) -> Result<i64> {
    id.parse()
        .map_err(|_| anyhow::anyhow!("Expected a numeric id, got {:?}", id))
}

pub async fn list(app: &App, resource: &str) -> Result<()> {
    let t = &app.travel;
    match resource_name(resource)? {
        "airlines" => print_json(&t.airlines.fetch_all(&[]).await?),
        "airplanes" => print_json(&t.airplanes.fetch_all(&[]).await?),
        "flights" => print_json(&t.flights.fetch_all(&[]).await?),
        "class-flights" => print_json(&t.class_flights.fetch_all(&[]).await?),
        "seats" => print_json(&t.seats.fetch_all(&[]).await?),
        "bookings" => print_json(&t.bookings.fetch_all(&[]).await?),
        "passengers" => print_json(&t.passengers.fetch_all(&[]).await?),
        "coupons" => print_json(&t.coupons.fetch_all(&[]).await?),
        "posts" => print_json(&app.posts.fetch_posts(None, None).await?),
        "home" => print_json(&t.home.load().await?),
        other => anyhow::bail!("Cannot list {}", other),
    }
}

pub async fn get(app: &App, resource: &str, id: &str) -> Result<()> {
    let t = &app.travel;
    let id_owned = id.to_string();
    match resource_name(resource)? {
        "airlines" => print_json(&t.airlines.fetch_one(&id_owned).await?),
        "airplanes" => print_json(&t.airplanes.fetch_one(&id_owned).await?),
        "flights" => print_json(&t.flights.fetch_one(&id_owned).await?),
        "class-flights" => print_json(&t.class_flights.fetch_one(&numeric_id(id)?).await?),
        "seats" => print_json(&t.seats.fetch_one(&numeric_id(id)?).await?),
        "bookings" => print_json(&t.bookings.fetch_one(&id_owned).await?),
        "passengers" => print_json(&t.passengers.fetch_one(&id_owned).await?),
        "coupons" => print_json(&t.coupons.fetch_one(&id_owned).await?),
        "posts" => print_json(&app.posts.fetch_one(&id_owned).await?),
        "home" => print_json(&t.home.load().await?),
        other => anyhow::bail!("Cannot get {}", other),
    }
}

/// Airplanes are deactivated and flights and bookings cancelled; the rest
/// are removed.
pub async fn delete(app: &App, resource: &str, id: &str) -> Result<()> {
    let t = &app.travel;
    let id_owned = id.to_string();
    match resource_name(resource)? {
        "airlines" => t.airlines.delete(&id_owned).await?,
        "airplanes" => t.airplanes.deactivate(id).await?,
        "flights" => t.flights.cancel(id).await?,
        "class-flights" => t.class_flights.delete(&numeric_id(id)?).await?,
        "seats" => t.seats.delete(&numeric_id(id)?).await?,
        "bookings" => t.bookings.cancel(id).await?,
        "passengers" => t.passengers.delete(&id_owned).await?,
        "coupons" => t.coupons.delete(id).await?,
        "posts" => app.posts.delete(id).await?,
        other => anyhow::bail!("Cannot delete {}", other),
    }
    println!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_names() {
        assert_eq!(resource_name("Flight").unwrap(), "flights");
        assert_eq!(resource_name("classflights").unwrap(), "class-flights");
        assert!(resource_name("users").is_err());
        assert!(numeric_id("12").is_ok());
        assert!(numeric_id("GA").is_err());
    }
}
