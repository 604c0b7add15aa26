use embassy_futures::block_on;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use i3c_imu::bus::{I2cBusError, MAX_WRITE_LEN};
use i3c_imu::{Bias, Bus, Error, I2cBus, Lsm6dsv, Lsm6dsvImu, Part, State};
use nalgebra::Vector3;

const ADDR: u8 = Lsm6dsv::I2C_ADDRESS;

#[test]
fn lsm6dsv_over_plain_i2c() {
    let expectations = [
        I2cTransaction::write(ADDR, vec![0x10, 0x07]),
        I2cTransaction::write(ADDR, vec![0x17, 0x00]),
        I2cTransaction::write(ADDR, vec![0x11, 0x07]),
        I2cTransaction::write(ADDR, vec![0x15, 0x01]),
        I2cTransaction::write_read(
            ADDR,
            vec![0x22],
            vec![
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // gyro
                0x00, 0x40, 0x00, 0x00, 0x00, 0x00, // accel
            ],
        ),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let mut imu = Lsm6dsvImu::with_address(I2cBus::new(i2c.clone()), ADDR, Default::default());
    block_on(imu.init_device()).unwrap();
    imu.set_bias(Bias::default()).unwrap();
    assert_eq!(imu.state(), State::Calibrated);

    let data = block_on(imu.read()).unwrap();
    assert_eq!(data.accel, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(data.gyro, Vector3::zeros());

    i2c.done();
}

#[test]
fn i2c_error_is_wrapped() {
    let expectations = [I2cTransaction::write(ADDR, vec![0x10, 0x07]).with_error(ErrorKind::Other)];
    let mut i2c = I2cMock::new(&expectations);

    let mut imu = Lsm6dsvImu::with_address(I2cBus::new(i2c.clone()), ADDR, Default::default());
    let result = block_on(imu.init_device());

    assert!(matches!(
        result,
        Err(Error::Bus(I2cBusError::I2c(ErrorKind::Other)))
    ));
    assert_eq!(imu.state(), State::Bound);

    i2c.done();
}

#[test]
fn oversized_write_never_reaches_the_bus() {
    let mut i2c = I2cMock::new(&[]);
    let mut bus = I2cBus::new(i2c.clone());

    let payload = [0u8; MAX_WRITE_LEN];
    let result = block_on(bus.write(ADDR, &[0x10], &payload));
    assert!(matches!(result, Err(I2cBusError::Overflow)));

    i2c.done();
}

#[test]
fn empty_subaddress_is_a_plain_read() {
    let expectations = [I2cTransaction::read(ADDR, vec![0xDE, 0xAD])];
    let mut i2c = I2cMock::new(&expectations);
    let mut bus = I2cBus::new(i2c.clone());

    let mut buf = [0u8; 2];
    block_on(bus.read(ADDR, &[], &mut buf)).unwrap();
    assert_eq!(buf, [0xDE, 0xAD]);

    i2c.done();
}
