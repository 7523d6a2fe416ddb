mod health;
mod mint;
