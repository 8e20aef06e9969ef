//! Numbered console menu over a [`RideSharingSystem`].

mod input;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};

use ride_core::store::RideStore;
use ride_core::user::User;
use ride_core::{BookingError, RideSharingSystem};
use tracing::debug;

use input::Tokens;

const MENU: &str = "\n========= RIDE SHARING SYSTEM =========\n\
1. Register Driver\n\
2. Register Customer\n\
3. Customer Login & Book Ride\n\
4. View All Drivers (Admin)\n\
5. View Ride History (Admin)\n\
6. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    RegisterDriver,
    RegisterCustomer,
    BookRide,
    ListDrivers,
    RideHistory,
    Exit,
}

impl MenuChoice {
    fn parse(token: &str) -> Option<Self> {
        match token.parse::<u8>().ok()? {
            1 => Some(Self::RegisterDriver),
            2 => Some(Self::RegisterCustomer),
            3 => Some(Self::BookRide),
            4 => Some(Self::ListDrivers),
            5 => Some(Self::RideHistory),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Answers to the four registration prompts.
struct Registration {
    id: String,
    name: String,
    phone: String,
    password: String,
}

pub struct Shell<R, W> {
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: Tokens::new(input),
            out,
        }
    }

    /// Serve menu commands until `6` or end of input.
    pub fn run<S: RideStore>(&mut self, system: &mut RideSharingSystem<S>) -> io::Result<()> {
        loop {
            write!(self.out, "{MENU}")?;
            let Some(token) = self.prompt("Enter choice: ")? else {
                writeln!(self.out)?;
                break;
            };
            let Some(choice) = MenuChoice::parse(&token) else {
                writeln!(self.out, "Invalid Choice!")?;
                continue;
            };
            debug!(?choice, "menu selection");

            match choice {
                MenuChoice::RegisterDriver => self.register_driver(system)?,
                MenuChoice::RegisterCustomer => self.register_customer(system)?,
                MenuChoice::BookRide => self.book_ride(system)?,
                MenuChoice::ListDrivers => self.list_drivers(system)?,
                MenuChoice::RideHistory => self.ride_history(system)?,
                MenuChoice::Exit => break,
            }
        }
        writeln!(self.out, "Exiting System...")?;
        self.out.flush()
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.input.next_token()
    }

    fn read_registration(&mut self, kind: &str) -> io::Result<Option<Registration>> {
        let Some(id) = self.prompt(&format!("\nEnter {kind} ID: "))? else {
            return Ok(None);
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(None);
        };
        let Some(phone) = self.prompt("Enter Phone: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Enter Password: ")? else {
            return Ok(None);
        };
        Ok(Some(Registration {
            id,
            name,
            phone,
            password,
        }))
    }

    fn register_driver<S: RideStore>(
        &mut self,
        system: &mut RideSharingSystem<S>,
    ) -> io::Result<()> {
        let Some(reg) = self.read_registration("Driver")? else {
            return Ok(());
        };
        match system.register_driver(&reg.id, &reg.name, &reg.phone, &reg.password) {
            Ok(_) => writeln!(self.out, "Driver Registered Successfully!"),
            Err(error) => writeln!(self.out, "Error: {error}"),
        }
    }

    fn register_customer<S: RideStore>(
        &mut self,
        system: &mut RideSharingSystem<S>,
    ) -> io::Result<()> {
        let Some(reg) = self.read_registration("Customer")? else {
            return Ok(());
        };
        match system.register_customer(&reg.id, &reg.name, &reg.phone, &reg.password) {
            Ok(_) => writeln!(self.out, "Customer Registered Successfully!"),
            Err(error) => writeln!(self.out, "Error: {error}"),
        }
    }

    fn book_ride<S: RideStore>(&mut self, system: &mut RideSharingSystem<S>) -> io::Result<()> {
        let Some(id) = self.prompt("\nEnter Customer ID: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Enter Password: ")? else {
            return Ok(());
        };
        if let Err(error) = system.login(&id, &password) {
            return writeln!(self.out, "{error}");
        }
        writeln!(self.out, "Login Successful!")?;

        let Some(distance) = self.prompt("\nEnter Distance (km): ")? else {
            return Ok(());
        };
        let Ok(distance_km) = distance.parse::<f64>() else {
            return writeln!(self.out, "Error: '{distance}' is not a distance");
        };

        let booking = match system.book_ride(&id, &password, distance_km) {
            Ok(booking) => booking,
            Err(error @ BookingError::NoDriverAvailable) => {
                return writeln!(self.out, "{error}");
            }
            Err(error) => return writeln!(self.out, "Error: {error}"),
        };

        writeln!(self.out, "\nRide Booked Successfully!")?;
        writeln!(self.out, "\n{}", booking.ride())?;

        // An unreadable or missing rating is ignored like an out-of-range one;
        // the driver is released either way.
        let rating = self
            .prompt("\nRate Driver (1-5): ")?
            .and_then(|token| token.parse::<f64>().ok())
            .unwrap_or(f64::NAN);
        booking.rate(rating);
        Ok(())
    }

    fn list_drivers<S: RideStore>(&mut self, system: &RideSharingSystem<S>) -> io::Result<()> {
        writeln!(self.out, "\n--- Driver List ---")?;
        for driver in system.list_drivers() {
            writeln!(self.out, "{}", User::Driver(driver).describe())?;
        }
        Ok(())
    }

    fn ride_history<S: RideStore>(&mut self, system: &RideSharingSystem<S>) -> io::Result<()> {
        writeln!(self.out, "\n--- Ride History ---")?;
        for ride in system.ride_history() {
            writeln!(self.out, "\n{ride}")?;
        }
        Ok(())
    }
}
