use super::*;

impl AddressRepo for DbReadWrite<'_> {
    fn get_address(&self, id: &str) -> Result<Address> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }

    fn addresses_within_bbox(&self, bbox: &MapBbox) -> Result<Vec<Address>> {
        addresses_within_bbox(&mut self.conn.borrow_mut(), bbox)
    }

    fn create_address(&self, address: &Address) -> Result<()> {
        create_address(&mut self.conn.borrow_mut(), address)
    }
    fn update_address(&self, address: &Address) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), address)
    }
    fn delete_address(&self, id: &str) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }
}

impl AddressRepo for DbConnection<'_> {
    fn get_address(&self, id: &str) -> Result<Address> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }

    fn addresses_within_bbox(&self, bbox: &MapBbox) -> Result<Vec<Address>> {
        addresses_within_bbox(&mut self.conn.borrow_mut(), bbox)
    }

    fn create_address(&self, address: &Address) -> Result<()> {
        create_address(&mut self.conn.borrow_mut(), address)
    }
    fn update_address(&self, address: &Address) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), address)
    }
    fn delete_address(&self, id: &str) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }
}

impl AddressRepo for DbReadOnly<'_> {
    fn get_address(&self, id: &str) -> Result<Address> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }

    fn addresses_within_bbox(&self, bbox: &MapBbox) -> Result<Vec<Address>> {
        addresses_within_bbox(&mut self.conn.borrow_mut(), bbox)
    }

    fn create_address(&self, address: &Address) -> Result<()> {
        create_address(&mut self.conn.borrow_mut(), address)
    }
    fn update_address(&self, address: &Address) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), address)
    }
    fn delete_address(&self, id: &str) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }
}
